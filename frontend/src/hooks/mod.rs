pub mod use_auth;
pub mod use_config;
pub mod use_viewport_width;

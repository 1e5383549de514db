use shared::AppConfig;
use yew::prelude::*;

/// Site config provided at the root of the app
#[hook]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

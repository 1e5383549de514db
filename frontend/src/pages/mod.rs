pub mod about;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod legal;
pub mod login;
pub mod register;

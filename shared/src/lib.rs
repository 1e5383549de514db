//! Domain types and UI state machines for the NexClaw site and dashboard.
//!
//! Nothing here touches the DOM, so the whole crate is testable natively.

pub mod auth;
pub mod config;
pub mod contact;
pub mod content;
pub mod dialogs;
pub mod format;
pub mod mock_data;
pub mod models;
pub mod navigation;
pub mod registration;
pub mod risk;
pub mod routes;
pub mod validation;

pub use auth::{AuthError, AuthSession, Credentials, RegistrationFields};
pub use config::AppConfig;
pub use models::{
    NotificationSettings, NotificationToggle, RiskLog, RiskLogStatus, RiskRule, RuleKind,
    Severity, Transaction, TransactionStatus, TransactionType, User, Wallet,
};
pub use navigation::{Section, SidebarLayout, SidebarState};
pub use registration::{RegistrationFlow, RegistrationStep};
pub use risk::{RiskPanel, RiskTab};
pub use routes::Page;
pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed-in account holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub created_at: String,
}

/// A custodial wallet shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    /// Optional user-assigned label
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: String,
    /// Balance as display text, e.g. "2.45 ETH"
    pub balance: String,
    /// ID of the user this wallet belongs to
    pub user_id: String,
}

impl Wallet {
    /// Label to show in lists, falling back to a shortened address
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => short_address(&self.address),
        }
    }
}

/// Shorten an address to `0x1234…abcd` form for compact display
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Buy,
    Send,
    Receive,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "Buy"),
            TransactionType::Send => write!(f, "Send"),
            TransactionType::Receive => write!(f, "Receive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// CSS modifier used by status badges
    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "status success",
            TransactionStatus::Pending => "status pending",
            TransactionStatus::Failed => "status failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Success => write!(f, "Success"),
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Read-only wallet activity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    /// Amount as display text, e.g. "0.50 ETH"
    pub amount: String,
    pub status: TransactionStatus,
    /// RFC 3339
    pub timestamp: String,
    pub wallet_id: String,
}

/// What a risk rule checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Single transfers above `max` (display units) are held
    AmountLimit { max: String },
    /// More than `max_per_hour` outgoing transfers per hour are held
    FrequencyLimit { max_per_hour: u32 },
    /// Destination addresses are screened against a blocklist
    AddressCheck,
}

impl RuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::AmountLimit { .. } => "Amount limit",
            RuleKind::FrequencyLimit { .. } => "Frequency limit",
            RuleKind::AddressCheck => "Address check",
        }
    }

    /// Short summary of the configured threshold
    pub fn summary(&self) -> String {
        match self {
            RuleKind::AmountLimit { max } => format!("Max {} per transfer", max),
            RuleKind::FrequencyLimit { max_per_hour } => {
                format!("Max {} transfers per hour", max_per_hour)
            }
            RuleKind::AddressCheck => "Screen destination addresses".to_string(),
        }
    }
}

/// Risk rule configuration, toggled only in local UI state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: RuleKind,
    /// Wallet this rule applies to; `None` means every wallet
    pub wallet_id: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Low => "severity low",
            Severity::Medium => "severity medium",
            Severity::High => "severity high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLogStatus {
    Blocked,
    Flagged,
    Allowed,
}

impl fmt::Display for RiskLogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLogStatus::Blocked => write!(f, "Blocked"),
            RiskLogStatus::Flagged => write!(f, "Flagged"),
            RiskLogStatus::Allowed => write!(f, "Allowed"),
        }
    }
}

/// Past rule evaluation, static mock row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLog {
    pub id: String,
    pub timestamp: String,
    pub wallet_id: String,
    pub severity: Severity,
    pub reason: String,
    pub status: RiskLogStatus,
}

/// Names of the notification toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationToggle {
    EmailAlerts,
    PushNotifications,
    HighRiskOnly,
    DailySummary,
    TransactionAlerts,
}

impl NotificationToggle {
    pub const ALL: [NotificationToggle; 5] = [
        NotificationToggle::EmailAlerts,
        NotificationToggle::PushNotifications,
        NotificationToggle::HighRiskOnly,
        NotificationToggle::DailySummary,
        NotificationToggle::TransactionAlerts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationToggle::EmailAlerts => "Email alerts",
            NotificationToggle::PushNotifications => "Push notifications",
            NotificationToggle::HighRiskOnly => "High-risk events only",
            NotificationToggle::DailySummary => "Daily summary",
            NotificationToggle::TransactionAlerts => "Transaction alerts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_alerts: bool,
    pub push_notifications: bool,
    pub high_risk_only: bool,
    pub daily_summary: bool,
    pub transaction_alerts: bool,
}

impl NotificationSettings {
    pub fn get(&self, toggle: NotificationToggle) -> bool {
        match toggle {
            NotificationToggle::EmailAlerts => self.email_alerts,
            NotificationToggle::PushNotifications => self.push_notifications,
            NotificationToggle::HighRiskOnly => self.high_risk_only,
            NotificationToggle::DailySummary => self.daily_summary,
            NotificationToggle::TransactionAlerts => self.transaction_alerts,
        }
    }

    /// Flip exactly one toggle
    pub fn toggle(&mut self, toggle: NotificationToggle) {
        let field = match toggle {
            NotificationToggle::EmailAlerts => &mut self.email_alerts,
            NotificationToggle::PushNotifications => &mut self.push_notifications,
            NotificationToggle::HighRiskOnly => &mut self.high_risk_only,
            NotificationToggle::DailySummary => &mut self.daily_summary,
            NotificationToggle::TransactionAlerts => &mut self.transaction_alerts,
        };
        *field = !*field;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(name: Option<&str>) -> Wallet {
        Wallet {
            id: "w1".to_string(),
            name: name.map(str::to_string),
            description: None,
            address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
            balance: "1.00 ETH".to_string(),
            user_id: "u1".to_string(),
        }
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"),
            "0x71C7…976F"
        );
        // Short inputs are left alone
        assert_eq!(short_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_wallet_display_name() {
        assert_eq!(wallet(Some("Savings")).display_name(), "Savings");
        assert_eq!(wallet(None).display_name(), "0x71C7…976F");
        assert_eq!(wallet(Some("   ")).display_name(), "0x71C7…976F");
    }

    #[test]
    fn test_notification_toggle_flips_one_field() {
        let mut settings = NotificationSettings {
            email_alerts: true,
            push_notifications: false,
            high_risk_only: false,
            daily_summary: true,
            transaction_alerts: true,
        };
        let before = settings.clone();

        settings.toggle(NotificationToggle::PushNotifications);

        assert!(settings.push_notifications);
        for toggle in NotificationToggle::ALL {
            if toggle != NotificationToggle::PushNotifications {
                assert_eq!(settings.get(toggle), before.get(toggle));
            }
        }
    }

    #[test]
    fn test_rule_kind_summary() {
        let kind = RuleKind::FrequencyLimit { max_per_hour: 5 };
        assert_eq!(kind.label(), "Frequency limit");
        assert_eq!(kind.summary(), "Max 5 transfers per hour");
    }
}

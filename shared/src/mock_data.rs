//! In-memory seed data standing in for a backend.
//!
//! Every accessor returns a fresh copy so callers can mutate their local state
//! freely; nothing here is ever written back.

use crate::models::{
    NotificationSettings, RiskLog, RiskLogStatus, RiskRule, RuleKind, Severity, Transaction,
    TransactionStatus, TransactionType, User, Wallet,
};

pub const DEMO_USER_ID: &str = "user_1";

pub fn users() -> Vec<User> {
    vec![
        User {
            id: DEMO_USER_ID.to_string(),
            name: "Alex Morgan".to_string(),
            email: "demo@nexclaw.io".to_string(),
            created_at: "2024-01-15T09:30:00Z".to_string(),
        },
        User {
            id: "user_2".to_string(),
            name: "Jordan Lee".to_string(),
            email: "jordan@nexclaw.io".to_string(),
            created_at: "2024-03-02T14:05:00Z".to_string(),
        },
    ]
}

pub fn find_user_by_email(email: &str) -> Option<User> {
    users()
        .into_iter()
        .find(|user| user.email.eq_ignore_ascii_case(email.trim()))
}

pub fn wallets() -> Vec<Wallet> {
    vec![
        Wallet {
            id: "wallet_1".to_string(),
            name: Some("Main Wallet".to_string()),
            description: Some("Primary trading wallet".to_string()),
            address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
            balance: "2.4500 ETH".to_string(),
            user_id: DEMO_USER_ID.to_string(),
        },
        Wallet {
            id: "wallet_2".to_string(),
            name: Some("Cold Storage".to_string()),
            description: Some("Long-term holdings".to_string()),
            address: "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF".to_string(),
            balance: "12.0000 ETH".to_string(),
            user_id: DEMO_USER_ID.to_string(),
        },
        Wallet {
            id: "wallet_3".to_string(),
            name: None,
            description: None,
            address: "0x6813Eb9362372EEF6200f3b1dbC3f819671cBA69".to_string(),
            balance: "0.1520 ETH".to_string(),
            user_id: DEMO_USER_ID.to_string(),
        },
        Wallet {
            id: "wallet_4".to_string(),
            name: Some("Jordan's Wallet".to_string()),
            description: None,
            address: "0x1efF47bc3a10a45D4B230B5d10E37751FE6AA718".to_string(),
            balance: "0.8000 ETH".to_string(),
            user_id: "user_2".to_string(),
        },
    ]
}

pub fn wallets_for_user(user_id: &str) -> Vec<Wallet> {
    wallets()
        .into_iter()
        .filter(|wallet| wallet.user_id == user_id)
        .collect()
}

pub fn transactions() -> Vec<Transaction> {
    let rows = [
        ("tx_1", TransactionType::Buy, "1.0000 ETH", TransactionStatus::Success, "2024-06-01T10:15:00Z", "wallet_1"),
        ("tx_2", TransactionType::Send, "0.2500 ETH", TransactionStatus::Success, "2024-06-02T16:40:00Z", "wallet_1"),
        ("tx_3", TransactionType::Receive, "0.5000 ETH", TransactionStatus::Pending, "2024-06-03T08:05:00Z", "wallet_1"),
        ("tx_4", TransactionType::Receive, "12.0000 ETH", TransactionStatus::Success, "2024-05-20T12:00:00Z", "wallet_2"),
        ("tx_5", TransactionType::Send, "3.0000 ETH", TransactionStatus::Failed, "2024-06-04T21:30:00Z", "wallet_2"),
        ("tx_6", TransactionType::Buy, "0.1520 ETH", TransactionStatus::Success, "2024-06-05T07:45:00Z", "wallet_3"),
        ("tx_7", TransactionType::Receive, "0.8000 ETH", TransactionStatus::Success, "2024-06-01T11:11:00Z", "wallet_4"),
    ];

    rows.iter()
        .map(|(id, transaction_type, amount, status, timestamp, wallet_id)| Transaction {
            id: id.to_string(),
            transaction_type: *transaction_type,
            amount: amount.to_string(),
            status: *status,
            timestamp: timestamp.to_string(),
            wallet_id: wallet_id.to_string(),
        })
        .collect()
}

pub fn transactions_for_wallet(wallet_id: &str) -> Vec<Transaction> {
    transactions()
        .into_iter()
        .filter(|tx| tx.wallet_id == wallet_id)
        .collect()
}

/// Transactions belonging to any of the given wallets, newest first
pub fn transactions_for_wallets(wallets: &[Wallet]) -> Vec<Transaction> {
    let mut result: Vec<Transaction> = transactions()
        .into_iter()
        .filter(|tx| wallets.iter().any(|wallet| wallet.id == tx.wallet_id))
        .collect();
    // RFC 3339 in a single offset sorts lexically
    result.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    result
}

pub fn risk_rules() -> Vec<RiskRule> {
    vec![
        RiskRule {
            id: "rule_1".to_string(),
            name: "Large transfer limit".to_string(),
            description: "Hold any single transfer above the configured amount".to_string(),
            kind: RuleKind::AmountLimit { max: "5.0 ETH".to_string() },
            wallet_id: None,
            enabled: true,
        },
        RiskRule {
            id: "rule_2".to_string(),
            name: "Burst protection".to_string(),
            description: "Hold outgoing transfers when too many happen within an hour".to_string(),
            kind: RuleKind::FrequencyLimit { max_per_hour: 5 },
            wallet_id: None,
            enabled: true,
        },
        RiskRule {
            id: "rule_3".to_string(),
            name: "Blocklisted destinations".to_string(),
            description: "Reject transfers to addresses on the sanctions blocklist".to_string(),
            kind: RuleKind::AddressCheck,
            wallet_id: None,
            enabled: false,
        },
        RiskRule {
            id: "rule_4".to_string(),
            name: "Cold storage ceiling".to_string(),
            description: "Cold storage may not send more than 1 ETH at once".to_string(),
            kind: RuleKind::AmountLimit { max: "1.0 ETH".to_string() },
            wallet_id: Some("wallet_2".to_string()),
            enabled: true,
        },
    ]
}

pub fn risk_logs() -> Vec<RiskLog> {
    let rows = [
        ("log_1", "2024-06-04T21:30:05Z", "wallet_2", Severity::High, "Transfer of 3.0 ETH exceeds cold storage ceiling", RiskLogStatus::Blocked),
        ("log_2", "2024-06-03T08:06:00Z", "wallet_1", Severity::Low, "Incoming transfer from new counterparty", RiskLogStatus::Allowed),
        ("log_3", "2024-06-02T16:41:00Z", "wallet_1", Severity::Medium, "Third outgoing transfer within an hour", RiskLogStatus::Flagged),
        ("log_4", "2024-05-28T19:20:00Z", "wallet_3", Severity::High, "Destination matched blocklist entry", RiskLogStatus::Blocked),
        ("log_5", "2024-05-25T09:00:00Z", "wallet_1", Severity::Low, "Routine amount check passed", RiskLogStatus::Allowed),
    ];

    rows.iter()
        .map(|(id, timestamp, wallet_id, severity, reason, status)| RiskLog {
            id: id.to_string(),
            timestamp: timestamp.to_string(),
            wallet_id: wallet_id.to_string(),
            severity: *severity,
            reason: reason.to_string(),
            status: *status,
        })
        .collect()
}

pub fn notification_settings() -> NotificationSettings {
    NotificationSettings {
        email_alerts: true,
        push_notifications: false,
        high_risk_only: false,
        daily_summary: true,
        transaction_alerts: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_user_by_email_is_case_insensitive() {
        let user = find_user_by_email("  DEMO@nexclaw.io ").unwrap();
        assert_eq!(user.id, DEMO_USER_ID);
        assert!(find_user_by_email("nobody@nexclaw.io").is_none());
    }

    #[test]
    fn test_wallets_for_user() {
        let wallets = wallets_for_user(DEMO_USER_ID);
        assert_eq!(wallets.len(), 3);
        assert!(wallets.iter().all(|w| w.user_id == DEMO_USER_ID));
        assert!(wallets_for_user("user_unknown").is_empty());
    }

    #[test]
    fn test_transactions_for_wallets_sorted_newest_first() {
        let wallets = wallets_for_user(DEMO_USER_ID);
        let txs = transactions_for_wallets(&wallets);

        assert!(txs.iter().all(|tx| tx.wallet_id != "wallet_4"));
        assert_eq!(txs.first().map(|tx| tx.id.as_str()), Some("tx_6"));
        for pair in txs.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<String> = risk_rules().into_iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), risk_rules().len());

        let mut tx_ids: Vec<String> = transactions().into_iter().map(|t| t.id).collect();
        tx_ids.sort();
        tx_ids.dedup();
        assert_eq!(tx_ids.len(), transactions().len());
    }
}

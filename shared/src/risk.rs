use log::{info, warn};

use crate::mock_data;
use crate::models::{NotificationSettings, NotificationToggle, RiskLog, RiskRule, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskTab {
    #[default]
    Rules,
    Logs,
    Notifications,
}

impl RiskTab {
    pub const ALL: [RiskTab; 3] = [RiskTab::Rules, RiskTab::Logs, RiskTab::Notifications];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTab::Rules => "Rules",
            RiskTab::Logs => "Logs",
            RiskTab::Notifications => "Notifications",
        }
    }
}

/// Local copy of the risk data behind the risk dashboard. Changes are
/// never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskPanel {
    pub tab: RiskTab,
    pub rules: Vec<RiskRule>,
    pub logs: Vec<RiskLog>,
    pub notifications: NotificationSettings,
}

impl Default for RiskPanel {
    fn default() -> Self {
        Self::from_mock()
    }
}

impl RiskPanel {
    pub fn from_mock() -> Self {
        Self {
            tab: RiskTab::default(),
            rules: mock_data::risk_rules(),
            logs: mock_data::risk_logs(),
            notifications: mock_data::notification_settings(),
        }
    }

    pub fn select_tab(&mut self, tab: RiskTab) {
        self.tab = tab;
    }

    /// Flip `enabled` on the rule with `rule_id`. Returns the new value,
    /// or `None` when no rule has that id.
    pub fn toggle_rule(&mut self, rule_id: &str) -> Option<bool> {
        match self.rules.iter_mut().find(|rule| rule.id == rule_id) {
            Some(rule) => {
                rule.enabled = !rule.enabled;
                info!("Rule {} enabled={} (local only)", rule.id, rule.enabled);
                Some(rule.enabled)
            }
            None => {
                warn!("Toggle requested for unknown rule {}", rule_id);
                None
            }
        }
    }

    pub fn toggle_notification(&mut self, toggle: NotificationToggle) {
        self.notifications.toggle(toggle);
    }

    pub fn enabled_rule_count(&self) -> usize {
        self.rules.iter().filter(|rule| rule.enabled).count()
    }

    pub fn high_severity_count(&self) -> usize {
        self.logs
            .iter()
            .filter(|log| log.severity == Severity::High)
            .count()
    }

    /// Global rules plus those scoped to `wallet_id`
    pub fn rules_for_wallet(&self, wallet_id: &str) -> Vec<&RiskRule> {
        self.rules
            .iter()
            .filter(|rule| rule.wallet_id.as_deref().map_or(true, |id| id == wallet_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_target_rule() {
        let mut panel = RiskPanel::from_mock();
        let before = panel.rules.clone();

        assert_eq!(panel.toggle_rule("rule_2"), Some(false));

        for (old, new) in before.iter().zip(panel.rules.iter()) {
            if old.id == "rule_2" {
                assert_eq!(new.enabled, !old.enabled);
                assert_eq!(new.name, old.name);
                assert_eq!(new.kind, old.kind);
                assert_eq!(new.wallet_id, old.wallet_id);
            } else {
                assert_eq!(new, old);
            }
        }

        // Toggling again restores the original
        panel.toggle_rule("rule_2");
        assert_eq!(panel.rules, before);
    }

    #[test]
    fn test_toggle_unknown_rule_is_noop() {
        let mut panel = RiskPanel::from_mock();
        let before = panel.clone();
        assert_eq!(panel.toggle_rule("rule_missing"), None);
        assert_eq!(panel, before);
    }

    #[test]
    fn test_tab_switch_keeps_data() {
        let mut panel = RiskPanel::from_mock();
        panel.toggle_rule("rule_3");
        panel.select_tab(RiskTab::Logs);
        panel.select_tab(RiskTab::Rules);

        assert_eq!(panel.tab, RiskTab::Rules);
        assert!(panel.rules.iter().find(|r| r.id == "rule_3").unwrap().enabled);
    }

    #[test]
    fn test_counters() {
        let mut panel = RiskPanel::from_mock();
        assert_eq!(panel.enabled_rule_count(), 3);
        assert_eq!(panel.high_severity_count(), 2);

        panel.toggle_rule("rule_3");
        assert_eq!(panel.enabled_rule_count(), 4);
    }

    #[test]
    fn test_rules_for_wallet() {
        let panel = RiskPanel::from_mock();
        let ids: Vec<&str> = panel
            .rules_for_wallet("wallet_1")
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["rule_1", "rule_2", "rule_3"]);
        assert_eq!(panel.rules_for_wallet("wallet_2").len(), 4);
    }

    #[test]
    fn test_toggle_notification() {
        let mut panel = RiskPanel::from_mock();
        assert!(!panel.notifications.push_notifications);
        panel.toggle_notification(NotificationToggle::PushNotifications);
        assert!(panel.notifications.push_notifications);
        assert!(panel.notifications.email_alerts);
    }
}

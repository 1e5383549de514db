use shared::format::format_timestamp;
use shared::models::NotificationToggle;
use shared::{RiskPanel, RiskTab};
use yew::prelude::*;

use crate::components::toggle_switch::ToggleSwitch;
use crate::services::logging::Logger;

pub enum Msg {
    SelectTab(RiskTab),
    ToggleRule(String),
    ToggleNotification(NotificationToggle),
}

/// Rules, evaluation logs and notification preferences. All changes stay in
/// this component's state and are gone after a reload.
pub struct RiskDashboard {
    panel: RiskPanel,
}

impl Component for RiskDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            panel: RiskPanel::from_mock(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTab(tab) => {
                if self.panel.tab == tab {
                    return false;
                }
                self.panel.select_tab(tab);
                true
            }
            Msg::ToggleRule(rule_id) => self.panel.toggle_rule(&rule_id).is_some(),
            Msg::ToggleNotification(toggle) => {
                self.panel.toggle_notification(toggle);
                Logger::debug_with_component(
                    "RiskDashboard",
                    &format!("{} -> {}", toggle.label(), self.panel.notifications.get(toggle)),
                );
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let body = match self.panel.tab {
            RiskTab::Rules => self.view_rules(ctx),
            RiskTab::Logs => self.view_logs(),
            RiskTab::Notifications => self.view_notifications(ctx),
        };

        html! {
            <div class="risk-dashboard">
                <div class="risk-summary">
                    <span>{format!("{} of {} rules active", self.panel.enabled_rule_count(), self.panel.rules.len())}</span>
                    <span class="severity high">{format!("{} high-severity events", self.panel.high_severity_count())}</span>
                </div>

                <div class="tab-bar" role="tablist">
                    {for RiskTab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let active = tab == self.panel.tab;
                        html! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected={active.to_string()}
                                class={classes!("tab", active.then_some("active"))}
                                onclick={link.callback(move |_| Msg::SelectTab(tab))}
                            >
                                {tab.label()}
                            </button>
                        }
                    })}
                </div>

                <div class="tab-panel" role="tabpanel">
                    {body}
                </div>
            </div>
        }
    }
}

impl RiskDashboard {
    fn view_rules(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ul class="rule-list">
                {for self.panel.rules.iter().map(|rule| {
                    let rule_id = rule.id.clone();
                    let on_toggle = ctx.link().callback(move |_: ()| Msg::ToggleRule(rule_id.clone()));
                    html! {
                        <li key={rule.id.clone()} class="rule-item">
                            <div class="rule-text">
                                <div class="rule-title">
                                    <strong>{&rule.name}</strong>
                                    <span class="badge">{rule.kind.label()}</span>
                                </div>
                                <p>{&rule.description}</p>
                                <small>
                                    {rule.kind.summary()}
                                    {match rule.wallet_id.as_ref() {
                                        Some(wallet_id) => format!(" · wallet {}", wallet_id),
                                        None => " · all wallets".to_string(),
                                    }}
                                </small>
                            </div>
                            <ToggleSwitch checked={rule.enabled} label={rule.name.clone()} {on_toggle} />
                        </li>
                    }
                })}
            </ul>
        }
    }

    fn view_logs(&self) -> Html {
        if self.panel.logs.is_empty() {
            return html! { <div class="empty-state">{"No risk events recorded"}</div> };
        }

        html! {
            <div class="table-container">
                <table class="risk-log-table">
                    <thead>
                        <tr>
                            <th>{"Time"}</th>
                            <th>{"Wallet"}</th>
                            <th>{"Severity"}</th>
                            <th>{"Reason"}</th>
                            <th>{"Outcome"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for self.panel.logs.iter().map(|log| html! {
                            <tr key={log.id.clone()}>
                                <td>{format_timestamp(&log.timestamp)}</td>
                                <td>{&log.wallet_id}</td>
                                <td><span class={log.severity.css_class()}>{log.severity.to_string()}</span></td>
                                <td>{&log.reason}</td>
                                <td>{log.status.to_string()}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        }
    }

    fn view_notifications(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ul class="notification-list">
                {for NotificationToggle::ALL.iter().map(|toggle| {
                    let toggle = *toggle;
                    html! {
                        <li class="notification-item">
                            <span>{toggle.label()}</span>
                            <ToggleSwitch
                                checked={self.panel.notifications.get(toggle)}
                                label={toggle.label()}
                                on_toggle={ctx.link().callback(move |_: ()| Msg::ToggleNotification(toggle))}
                            />
                        </li>
                    }
                })}
            </ul>
        }
    }
}

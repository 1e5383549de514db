use shared::{RiskPanel, Transaction, TransactionStatus, Wallet};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::WalletActions;
use crate::components::transaction_table::TransactionTable;

const RECENT_LIMIT: usize = 5;

#[derive(Properties, PartialEq)]
pub struct OverviewSectionProps {
    pub wallets: Vec<Wallet>,
    pub transactions: Vec<Transaction>,
    pub actions: WalletActions,
}

#[function_component(OverviewSection)]
pub fn overview_section(props: &OverviewSectionProps) -> Html {
    // Counts come from the seeded panel; toggles made on the risk tab stay there
    let risk = use_memo((), |_| RiskPanel::from_mock());

    let pending = props
        .transactions
        .iter()
        .filter(|tx| tx.status == TransactionStatus::Pending)
        .count();
    let recent: Vec<Transaction> = props.transactions.iter().take(RECENT_LIMIT).cloned().collect();

    html! {
        <div class="overview">
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-label">{"Wallets"}</span>
                    <span class="stat-value">{props.wallets.len()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Transactions"}</span>
                    <span class="stat-value">{props.transactions.len()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Pending"}</span>
                    <span class="stat-value">{pending}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Active rules"}</span>
                    <span class="stat-value">{risk.enabled_rule_count()}</span>
                </div>
                <div class="stat-card warning">
                    <span class="stat-label">{"High-risk events"}</span>
                    <span class="stat-value">{risk.high_severity_count()}</span>
                </div>
            </div>

            <section class="wallet-summary">
                <h2>{"Your wallets"}</h2>
                {if props.wallets.is_empty() {
                    html! { <div class="empty-state">{"No wallets yet"}</div> }
                } else {
                    html! {
                        <ul class="wallet-summary-list">
                            {for props.wallets.iter().map(|wallet| {
                                let onclick = {
                                    let select = props.actions.select.clone();
                                    let wallet_id = wallet.id.clone();
                                    Callback::from(move |_: MouseEvent| select.emit(wallet_id.clone()))
                                };
                                html! {
                                    <li key={wallet.id.clone()}>
                                        <button type="button" class="wallet-summary-item" {onclick}>
                                            <span class="wallet-name">{wallet.display_name()}</span>
                                            <span class="wallet-balance">{&wallet.balance}</span>
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
            </section>

            <TransactionTable
                title="Recent Transactions"
                transactions={recent}
                wallets={Some(props.wallets.clone())}
            />
        </div>
    }
}

use shared::{mock_data, RiskPanel, Wallet};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::{WalletActions, WalletDialog};
use crate::components::transaction_table::TransactionTable;

#[derive(Properties, PartialEq)]
pub struct WalletDetailProps {
    pub wallet: Wallet,
    pub actions: WalletActions,
    pub on_back: Callback<MouseEvent>,
}

#[function_component(WalletDetail)]
pub fn wallet_detail(props: &WalletDetailProps) -> Html {
    let wallet = &props.wallet;
    let transactions = use_memo(wallet.id.clone(), |id| mock_data::transactions_for_wallet(id));
    let risk = use_memo((), |_| RiskPanel::from_mock());

    let dialog_button = |make: fn(Wallet) -> WalletDialog| {
        let open_dialog = props.actions.open_dialog.clone();
        let wallet = wallet.clone();
        Callback::from(move |_: MouseEvent| open_dialog.emit(make(wallet.clone())))
    };

    html! {
        <div class="wallet-detail">
            <button type="button" class="btn btn-link" onclick={props.on_back.clone()}>{"← All wallets"}</button>

            <section class="wallet-info card">
                <h2>{wallet.display_name()}</h2>
                <dl>
                    <dt>{"Address"}</dt>
                    <dd><code>{&wallet.address}</code></dd>
                    <dt>{"Balance"}</dt>
                    <dd>{&wallet.balance}</dd>
                    <dt>{"Description"}</dt>
                    <dd>{wallet.description.clone().unwrap_or_else(|| "No description".to_string())}</dd>
                </dl>
                <div class="wallet-actions">
                    <button type="button" class="btn" onclick={dialog_button(WalletDialog::Deposit)}>{"Deposit"}</button>
                    <button type="button" class="btn" onclick={dialog_button(WalletDialog::Edit)}>{"Edit"}</button>
                    <button type="button" class="btn btn-danger" onclick={dialog_button(WalletDialog::Delete)}>{"Delete"}</button>
                </div>
            </section>

            <section class="wallet-rules card">
                <h2>{"Applied rules"}</h2>
                <ul>
                    {for risk.rules_for_wallet(&wallet.id).into_iter().map(|rule| html! {
                        <li key={rule.id.clone()} class={classes!(if rule.enabled { "rule-on" } else { "rule-off" })}>
                            <strong>{&rule.name}</strong>
                            {" · "}{rule.kind.summary()}
                            if !rule.enabled {
                                <span class="badge">{"Disabled"}</span>
                            }
                        </li>
                    })}
                </ul>
            </section>

            <TransactionTable title="Wallet Transactions" transactions={(*transactions).clone()} />
        </div>
    }
}

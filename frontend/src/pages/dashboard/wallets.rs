use shared::models::short_address;
use shared::Wallet;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::{WalletActions, WalletDialog};

#[derive(Properties, PartialEq)]
pub struct WalletsSectionProps {
    pub wallets: Vec<Wallet>,
    pub actions: WalletActions,
}

#[function_component(WalletsSection)]
pub fn wallets_section(props: &WalletsSectionProps) -> Html {
    if props.wallets.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{"You have no wallets."}</p>
            </div>
        };
    }

    html! {
        <div class="wallet-grid">
            {for props.wallets.iter().map(|wallet| html! {
                <WalletCard
                    key={wallet.id.clone()}
                    wallet={wallet.clone()}
                    actions={props.actions.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WalletCardProps {
    pub wallet: Wallet,
    pub actions: WalletActions,
}

#[function_component(WalletCard)]
pub fn wallet_card(props: &WalletCardProps) -> Html {
    let dialog_button = |make: fn(Wallet) -> WalletDialog| {
        let open_dialog = props.actions.open_dialog.clone();
        let wallet = props.wallet.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open_dialog.emit(make(wallet.clone()));
        })
    };
    let on_deposit = dialog_button(WalletDialog::Deposit);
    let on_edit = dialog_button(WalletDialog::Edit);
    let on_delete = dialog_button(WalletDialog::Delete);

    let on_view = {
        let select = props.actions.select.clone();
        let wallet_id = props.wallet.id.clone();
        Callback::from(move |_: MouseEvent| select.emit(wallet_id.clone()))
    };

    let wallet = &props.wallet;

    html! {
        <div class="wallet-card">
            <div class="wallet-card-header">
                <h3>{wallet.display_name()}</h3>
                <span class="wallet-balance">{&wallet.balance}</span>
            </div>
            <code class="wallet-address" title={wallet.address.clone()}>{short_address(&wallet.address)}</code>
            if let Some(description) = wallet.description.as_ref() {
                <p class="wallet-description">{description}</p>
            }
            <div class="wallet-actions">
                <button type="button" class="btn btn-small" onclick={on_view}>{"View"}</button>
                <button type="button" class="btn btn-small" onclick={on_deposit}>{"Deposit"}</button>
                <button type="button" class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                <button type="button" class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
            </div>
        </div>
    }
}

use gloo::timers::future::TimeoutFuture;
use shared::dialogs::{DeleteWalletDialog, DELETE_CONFIRMATION};
use shared::Wallet;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_config::use_config;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DeleteWalletModalProps {
    pub is_open: bool,
    pub wallet: Option<Wallet>,
    pub on_delete: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(DeleteWalletModal)]
pub fn delete_wallet_modal(props: &DeleteWalletModalProps) -> Html {
    let config = use_config();
    let dialog = use_state(DeleteWalletDialog::default);

    // Reset state when modal opens
    use_effect_with(props.is_open, {
        let dialog = dialog.clone();
        move |is_open| {
            let mut fresh = DeleteWalletDialog::default();
            if *is_open {
                fresh.open();
            }
            dialog.set(fresh);
            || ()
        }
    });

    let on_input = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*dialog).clone();
            next.typed = input.value();
            dialog.set(next);
        })
    };

    let on_confirm = {
        let dialog = dialog.clone();
        let on_delete = props.on_delete.clone();
        let delay_ms = config.delete_delay_ms;
        let wallet_id = props.wallet.as_ref().map(|w| w.id.clone()).unwrap_or_default();
        Callback::from(move |_: MouseEvent| {
            let mut busy = (*dialog).clone();
            if !busy.confirm() {
                return;
            }
            dialog.set(busy.clone());

            let dialog = dialog.clone();
            let on_delete = on_delete.clone();
            let wallet_id = wallet_id.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                let mut done = busy;
                done.state.finish();
                dialog.set(done);
                Logger::info_with_component("delete-wallet", &format!("Deleted wallet {} locally", wallet_id));
                on_delete.emit(());
            });
        })
    };

    let request_close = {
        let dialog = dialog.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            let mut next = (*dialog).clone();
            if next.close() {
                dialog.set(next);
                on_close.emit(());
            }
        })
    };

    let on_backdrop_click = {
        let request_close = request_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            request_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }
    let Some(wallet) = props.wallet.as_ref() else {
        return html! {};
    };

    let busy = dialog.state.is_busy();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal danger" onclick={on_modal_click}>
                <h3 class="modal-title">{"🗑 Delete Wallet"}</h3>
                <p class="modal-text">
                    {"This removes "}
                    <strong>{wallet.display_name()}</strong>
                    {" from your dashboard. This cannot be undone."}
                </p>
                <div class="form-group">
                    <label for="delete-confirm">
                        {"Type "}<code>{DELETE_CONFIRMATION}</code>{" to confirm"}
                    </label>
                    <input
                        id="delete-confirm"
                        type="text"
                        class="modal-input"
                        autocomplete="off"
                        value={dialog.typed.clone()}
                        oninput={on_input}
                        disabled={busy}
                    />
                </div>
                <div class="modal-buttons">
                    <button
                        type="button"
                        class="btn btn-danger"
                        onclick={on_confirm}
                        disabled={!dialog.confirm_enabled()}
                    >
                        {if busy { "Deleting..." } else { "Delete wallet" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={busy}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}

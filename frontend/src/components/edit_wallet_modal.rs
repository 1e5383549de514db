use gloo::timers::future::TimeoutFuture;
use shared::dialogs::EditWalletDialog;
use shared::Wallet;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_config::use_config;

#[derive(Properties, PartialEq)]
pub struct EditWalletModalProps {
    pub is_open: bool,
    pub wallet: Option<Wallet>,
    /// Receives the edited wallet; the parent decides what to do with it
    pub on_save: Callback<Wallet>,
    pub on_close: Callback<()>,
}

#[function_component(EditWalletModal)]
pub fn edit_wallet_modal(props: &EditWalletModalProps) -> Html {
    let config = use_config();
    let dialog = use_state(EditWalletDialog::default);

    // Seed the form from the wallet each time the modal opens
    use_effect_with((props.is_open, props.wallet.clone()), {
        let dialog = dialog.clone();
        move |(is_open, wallet)| {
            let mut fresh = EditWalletDialog::default();
            if let (true, Some(wallet)) = (*is_open, wallet.as_ref()) {
                fresh.open(wallet);
            }
            dialog.set(fresh);
            || ()
        }
    });

    let on_name_input = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*dialog).clone();
            next.name = input.value();
            dialog.set(next);
        })
    };

    let on_description_input = {
        let dialog = dialog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*dialog).clone();
            next.description = input.value();
            dialog.set(next);
        })
    };

    let on_submit = {
        let dialog = dialog.clone();
        let wallet = props.wallet.clone();
        let on_save = props.on_save.clone();
        let delay_ms = config.save_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(wallet) = wallet.clone() else {
                return;
            };
            let mut busy = (*dialog).clone();
            if !busy.save() {
                return;
            }
            dialog.set(busy.clone());

            let dialog = dialog.clone();
            let on_save = on_save.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                let updated = busy.apply(&wallet);
                let mut done = busy;
                done.state.finish();
                dialog.set(done);
                on_save.emit(updated);
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
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"✏ Edit Wallet"}</h3>
                <p class="modal-subtitle"><code>{&wallet.address}</code></p>
                <form class="modal-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="wallet-name">{"Name"}</label>
                        <input
                            id="wallet-name"
                            type="text"
                            class="modal-input"
                            placeholder="e.g. Trading wallet"
                            value={dialog.name.clone()}
                            oninput={on_name_input}
                            disabled={busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="wallet-description">{"Description"}</label>
                        <textarea
                            id="wallet-description"
                            class="modal-input"
                            rows="3"
                            placeholder="What is this wallet for?"
                            value={dialog.description.clone()}
                            oninput={on_description_input}
                            disabled={busy}
                        />
                    </div>
                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={busy}>
                            {if busy { "Saving..." } else { "Save changes" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={busy}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

use gloo::timers::future::TimeoutFuture;
use shared::dialogs::{qr_code_url, DepositDialog};
use shared::Wallet;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_config::use_config;
use crate::services::clipboard;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DepositWalletModalProps {
    pub is_open: bool,
    pub wallet: Option<Wallet>,
    pub on_close: Callback<()>,
}

#[function_component(DepositWalletModal)]
pub fn deposit_wallet_modal(props: &DepositWalletModalProps) -> Html {
    let config = use_config();
    let dialog = use_state(DepositDialog::default);

    use_effect_with(props.is_open, {
        let dialog = dialog.clone();
        move |is_open| {
            let mut fresh = DepositDialog::default();
            if *is_open {
                fresh.open();
            }
            dialog.set(fresh);
            || ()
        }
    });

    let on_copy = {
        let dialog = dialog.clone();
        let address = props.wallet.as_ref().map(|w| w.address.clone()).unwrap_or_default();
        let reset_ms = config.copied_reset_ms;
        Callback::from(move |_: MouseEvent| {
            let dialog = dialog.clone();
            let address = address.clone();
            let mut copied = (*dialog).clone();
            spawn_local(async move {
                if let Err(e) = clipboard::copy_text(&address).await {
                    Logger::warn_with_component("deposit", &e);
                    return;
                }
                copied.mark_copied();
                dialog.set(copied.clone());

                TimeoutFuture::new(reset_ms).await;
                copied.reset_copied();
                dialog.set(copied);
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

    let on_close_click = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }
    let Some(wallet) = props.wallet.as_ref() else {
        return html! {};
    };

    let qr = match qr_code_url(&config.qr_endpoint, config.qr_size_px, &wallet.address) {
        Ok(src) => html! {
            <img
                class="deposit-qr"
                src={src}
                alt="Deposit address QR code"
                width={config.qr_size_px.to_string()}
                height={config.qr_size_px.to_string()}
            />
        },
        Err(e) => {
            Logger::error_with_component("deposit", &format!("Cannot build QR URL: {}", e));
            html! { <div class="deposit-qr placeholder">{"QR code unavailable"}</div> }
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"⬇ Deposit to "}{wallet.display_name()}</h3>
                <p class="modal-text">{"Send only ETH or ERC-20 tokens to this address."}</p>
                {qr}
                <div class="deposit-address">
                    <code>{&wallet.address}</code>
                    <button type="button" class="btn btn-small" onclick={on_copy}>
                        {if dialog.copied() { "✓ Copied!" } else { "Copy" }}
                    </button>
                </div>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_close_click}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}

use shared::auth::Credentials;
use shared::Page;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_auth::use_auth;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let auth = use_auth();
    let credentials = use_state(Credentials::default);

    // Errors from another auth form should not leak onto this one
    use_effect_with((), {
        let clear_error = auth.clear_error.clone();
        move |_| {
            clear_error.emit(());
            || ()
        }
    });

    let on_email = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*credentials).clone();
            next.email = input.value();
            credentials.set(next);
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*credentials).clone();
            next.password = input.value();
            credentials.set(next);
        })
    };

    let on_submit = {
        let credentials = credentials.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login.emit((*credentials).clone());
        })
    };

    let on_register = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Register);
        })
    };

    html! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>{"Welcome back"}</h1>
                <p class="auth-subtitle">{"Sign in to manage your wallets"}</p>

                if let Some(error) = auth.error.clone() {
                    <div class="form-message error">{error}</div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="login-email">{"Email"}</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder="you@example.com"
                            value={credentials.email.clone()}
                            oninput={on_email}
                            disabled={auth.busy}
                            autofocus=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{"Password"}</label>
                        <input
                            id="login-password"
                            type="password"
                            value={credentials.password.clone()}
                            oninput={on_password}
                            disabled={auth.busy}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={auth.busy}>
                        {if auth.busy { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {"New to NexClaw? "}
                    <a href={Page::Register.hash()} onclick={on_register}>{"Create an account"}</a>
                </p>
                <p class="auth-hint">{"Demo account: demo@nexclaw.io with any password"}</p>
            </div>
        </main>
    }
}

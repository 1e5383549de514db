use shared::auth::{self, RegistrationFields};
use shared::validation::MIN_PASSWORD_LEN;
use shared::{Page, RegistrationFlow, RegistrationStep};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_auth::use_auth;

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let auth = use_auth();
    let flow = use_state(RegistrationFlow::new);

    use_effect_with((), {
        let clear_error = auth.clear_error.clone();
        move |_| {
            clear_error.emit(());
            || ()
        }
    });

    let text_input = |apply: fn(&mut RegistrationFields, String)| {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*flow).clone();
            apply(&mut next.fields, input.value());
            flow.set(next);
        })
    };
    let on_name = text_input(|f, v| f.name = v);
    let on_email = text_input(|f, v| f.email = v);
    let on_password = text_input(|f, v| f.password = v);
    let on_confirm = text_input(|f, v| f.confirm_password = v);

    let on_terms = {
        let flow = flow.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*flow).clone();
            next.fields.agree_terms = input.checked();
            flow.set(next);
        })
    };

    let on_next = {
        let flow = flow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*flow).clone();
            next.next();
            flow.set(next);
        })
    };

    let on_back = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*flow).clone();
            next.back();
            flow.set(next);
        })
    };

    let on_submit = {
        let flow = flow.clone();
        let register = auth.register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*flow).clone();
            // Pre-check so the provider's delayed register cannot fail afterwards
            next.submit(|fields| {
                auth::create_account(fields)?;
                register.emit(fields.clone());
                Ok(())
            });
            flow.set(next);
        })
    };

    let on_login = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Login);
        })
    };

    let on_terms_link = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Terms);
        })
    };

    let step = flow.step();
    let fields = &flow.fields;
    let error = flow.error().map(str::to_string).or_else(|| auth.error.clone());

    let body = match step {
        RegistrationStep::Identity => html! {
            <form class="auth-form" onsubmit={on_next}>
                <div class="form-group">
                    <label for="register-name">{"Full name"}</label>
                    <input id="register-name" type="text" value={fields.name.clone()} oninput={on_name} autofocus=true />
                </div>
                <div class="form-group">
                    <label for="register-email">{"Email"}</label>
                    <input id="register-email" type="email" placeholder="you@example.com" value={fields.email.clone()} oninput={on_email} />
                </div>
                <button type="submit" class="btn btn-primary btn-block">{"Continue"}</button>
            </form>
        },
        RegistrationStep::Credentials => html! {
            <form class="auth-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="register-password">{"Password"}</label>
                    <input
                        id="register-password"
                        type="password"
                        placeholder={format!("At least {} characters", MIN_PASSWORD_LEN)}
                        value={fields.password.clone()}
                        oninput={on_password}
                        autofocus=true
                    />
                </div>
                <div class="form-group">
                    <label for="register-confirm">{"Confirm password"}</label>
                    <input id="register-confirm" type="password" value={fields.confirm_password.clone()} oninput={on_confirm} />
                </div>
                <label class="checkbox">
                    <input type="checkbox" checked={fields.agree_terms} onchange={on_terms} />
                    {"I agree to the "}
                    <a href={Page::Terms.hash()} onclick={on_terms_link}>{"Terms of Service"}</a>
                </label>
                <div class="auth-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_back}>{"Back"}</button>
                    <button type="submit" class="btn btn-primary">{"Create account"}</button>
                </div>
            </form>
        },
        RegistrationStep::Submitted => html! {
            <div class="auth-pending">
                <div class="spinner"></div>
                <p>{"Creating your account..."}</p>
            </div>
        },
    };

    html! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>{"Create your account"}</h1>
                <ol class="step-indicator">
                    <li class={classes!((step.number() >= 1).then_some("done"))}>{"Profile"}</li>
                    <li class={classes!((step.number() >= 2).then_some("done"))}>{"Security"}</li>
                </ol>

                if let Some(error) = error {
                    <div class="form-message error">{error}</div>
                }

                {body}

                <p class="auth-switch">
                    {"Already have an account? "}
                    <a href={Page::Login.hash()} onclick={on_login}>{"Sign in"}</a>
                </p>
            </div>
        </main>
    }
}

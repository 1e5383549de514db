use shared::format::format_date_long;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_auth::use_auth;

#[derive(Properties, PartialEq)]
pub struct SettingsSectionProps {
    pub on_logout: Callback<()>,
}

#[function_component(SettingsSection)]
pub fn settings_section(props: &SettingsSectionProps) -> Html {
    let auth = use_auth();

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let Some(user) = auth.user.as_ref() else {
        return html! {};
    };

    html! {
        <div class="settings">
            <section class="card">
                <h2>{"Profile"}</h2>
                <dl>
                    <dt>{"Name"}</dt>
                    <dd>{&user.name}</dd>
                    <dt>{"Email"}</dt>
                    <dd>{&user.email}</dd>
                    <dt>{"Member since"}</dt>
                    <dd>{format_date_long(&user.created_at)}</dd>
                </dl>
            </section>

            <section class="card">
                <h2>{"Session"}</h2>
                <p>{"Signing out returns you to the home page."}</p>
                <button type="button" class="btn btn-danger" onclick={on_logout}>{"Sign out"}</button>
            </section>
        </div>
    }
}

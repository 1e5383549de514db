use shared::content::{LEGAL_LAST_UPDATED, PRIVACY, TERMS};
use yew::prelude::*;

use crate::components::content_page::ContentPage;

fn last_updated() -> Option<AttrValue> {
    Some(format!("Last updated {}", LEGAL_LAST_UPDATED).into())
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! { <ContentPage title="Privacy Policy" subtitle={last_updated()} sections={PRIVACY} /> }
}

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! { <ContentPage title="Terms of Service" subtitle={last_updated()} sections={TERMS} /> }
}

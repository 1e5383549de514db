use shared::content::{ABOUT, TAGLINE};
use yew::prelude::*;

use crate::components::content_page::ContentPage;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <ContentPage title="About NexClaw" subtitle={Some(AttrValue::from(TAGLINE))} sections={ABOUT} />
    }
}

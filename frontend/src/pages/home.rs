use shared::content::{FEATURES, PRODUCT_NAME, TAGLINE};
use shared::Page;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let go = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(page))
    };

    html! {
        <main class="home-page">
            <section class="hero">
                <div class="container">
                    <h1>{PRODUCT_NAME}</h1>
                    <p class="hero-tagline">{TAGLINE}</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={go(Page::Register)}>{"Create free account"}</button>
                        <button class="btn btn-secondary" onclick={go(Page::About)}>{"Learn more"}</button>
                    </div>
                </div>
            </section>
            <section class="features">
                <div class="container feature-grid">
                    {for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    })}
                </div>
            </section>
        </main>
    }
}

use shared::content::PRODUCT_NAME;
use shared::Page;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_auth::use_auth;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

fn nav_link(page: Page, label: &'static str, current: Page, on_navigate: &Callback<Page>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        })
    };
    html! {
        <a
            href={page.hash()}
            class={classes!("nav-link", (page == current).then_some("active"))}
            {onclick}
        >
            {label}
        </a>
    }
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let auth = use_auth();

    html! {
        <header class="site-header">
            <div class="container">
                {nav_link(Page::Home, PRODUCT_NAME, props.current, &props.on_navigate)}
                <nav class="site-nav">
                    {for Page::PUBLIC_NAV.iter().skip(1).map(|page| {
                        nav_link(*page, page.title(), props.current, &props.on_navigate)
                    })}
                </nav>
                <div class="site-actions">
                    if auth.is_authenticated() {
                        {nav_link(Page::Dashboard, "Dashboard", props.current, &props.on_navigate)}
                    } else {
                        <>
                            {nav_link(Page::Login, "Sign in", props.current, &props.on_navigate)}
                            {nav_link(Page::Register, "Get started", props.current, &props.on_navigate)}
                        </>
                    }
                </div>
            </div>
        </header>
    }
}

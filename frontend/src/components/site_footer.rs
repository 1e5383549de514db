use shared::content::{PRODUCT_NAME, SUPPORT_EMAIL};
use shared::Page;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let link = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        html! { <a href={page.hash()} {onclick}>{page.title()}</a> }
    };

    html! {
        <footer class="site-footer">
            <div class="container">
                <span>{format!("© 2024 {}", PRODUCT_NAME)}</span>
                <nav class="footer-links">
                    {link(Page::About)}
                    {link(Page::Contact)}
                    {link(Page::Privacy)}
                    {link(Page::Terms)}
                </nav>
                <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
            </div>
        </footer>
    }
}

mod components;
mod hooks;
mod pages;
mod services;

use gloo::events::EventListener;
use log::LevelFilter;
use shared::content::PRODUCT_NAME;
use shared::{AppConfig, Page};
use yew::prelude::*;

use components::site_footer::SiteFooter;
use components::site_header::SiteHeader;
use hooks::use_auth::{use_auth, AuthProvider};
use pages::about::AboutPage;
use pages::contact::ContactPage;
use pages::dashboard::DashboardPage;
use pages::home::HomePage;
use pages::legal::{PrivacyPage, TermsPage};
use pages::login::LoginPage;
use pages::register::RegisterPage;
use services::logging::Logger;

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Point the address bar at `page`; the hashchange listener picks it up
fn set_location_hash(page: Page) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(page.hash()) {
        Logger::warn_with_component("router", &format!("Could not set hash: {:?}", e));
    }
}

fn set_document_title(page: Page) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(&format!("{} · {}", page.title(), PRODUCT_NAME));
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth();
    let requested = use_state(|| Page::from_hash(&current_hash()));

    // Back/forward buttons and typed URLs
    {
        let requested = requested.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_| {
                    requested.set(Page::from_hash(&current_hash()));
                })
            });
            move || drop(listener)
        });
    }

    let page = requested.resolve(auth.is_authenticated());

    // Redirects (guarded dashboard, signed-in users on login) rewrite the URL too
    use_effect_with(page, |page| {
        if Page::from_hash(&current_hash()) != *page {
            Logger::debug_with_component("router", &format!("Redirect -> {}", page.hash()));
            set_location_hash(*page);
        }
        set_document_title(*page);
        || ()
    });

    let on_navigate = {
        let requested = requested.clone();
        Callback::from(move |next: Page| {
            requested.set(next);
            set_location_hash(next);
        })
    };

    let on_logout = {
        let logout = auth.logout.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: ()| {
            logout.emit(());
            on_navigate.emit(Page::Home);
        })
    };

    let content = match page {
        Page::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
        Page::About => html! { <AboutPage /> },
        Page::Contact => html! { <ContactPage /> },
        Page::Privacy => html! { <PrivacyPage /> },
        Page::Terms => html! { <TermsPage /> },
        Page::Login => html! { <LoginPage on_navigate={on_navigate.clone()} /> },
        Page::Register => html! { <RegisterPage on_navigate={on_navigate.clone()} /> },
        Page::Dashboard => html! { <DashboardPage {on_logout} /> },
    };

    // The dashboard brings its own sidebar chrome
    if page == Page::Dashboard {
        return content;
    }

    html! {
        <div class="site">
            <SiteHeader current={page} on_navigate={on_navigate.clone()} />
            {content}
            <SiteFooter {on_navigate} />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| services::config::load_config());

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <AuthProvider delay_ms={config.auth_delay_ms}>
                <Shell />
            </AuthProvider>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    services::logging::init(LevelFilter::Info);
    Logger::info_with_component("app", &format!("Starting {}", PRODUCT_NAME));
    yew::Renderer::<App>::new().render();
}

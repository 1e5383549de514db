use gloo::timers::future::TimeoutFuture;
use shared::auth::{self, AuthSession, Credentials, RegistrationFields};
use shared::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Session-wide auth state handed to every page through context
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub user: Option<User>,
    /// A simulated login/register is in flight
    pub busy: bool,
    pub error: Option<String>,
    pub login: Callback<Credentials>,
    pub register: Callback<RegistrationFields>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub delay_ms: u32,
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let session = use_state(AuthSession::new);
    let busy = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    // Commit a validated user after the simulated round trip
    let sign_in_later = {
        let session = session.clone();
        let busy = busy.clone();
        let delay_ms = props.delay_ms;
        Callback::from(move |user: User| {
            let session = session.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                let mut next = AuthSession::new();
                next.sign_in(user);
                session.set(next);
                busy.set(false);
            });
        })
    };

    let login = {
        let busy = busy.clone();
        let error = error.clone();
        let sign_in_later = sign_in_later.clone();
        Callback::from(move |credentials: Credentials| {
            if *busy {
                return;
            }
            match auth::authenticate(&credentials) {
                Ok(user) => {
                    error.set(None);
                    sign_in_later.emit(user);
                }
                Err(e) => {
                    Logger::warn_with_component("auth", &format!("Login rejected: {}", e));
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    let register = {
        let busy = busy.clone();
        let error = error.clone();
        let sign_in_later = sign_in_later.clone();
        Callback::from(move |fields: RegistrationFields| {
            if *busy {
                return;
            }
            match auth::create_account(&fields) {
                Ok(user) => {
                    Logger::info_with_component("auth", &format!("Registering {}", user.email));
                    error.set(None);
                    sign_in_later.emit(user);
                }
                Err(e) => {
                    Logger::warn_with_component("auth", &format!("Registration rejected: {}", e));
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    let logout = {
        let session = session.clone();
        let error = error.clone();
        Callback::from(move |_| {
            let mut next = (*session).clone();
            next.logout();
            session.set(next);
            error.set(None);
        })
    };

    let clear_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    let context = AuthContext {
        user: session.user().cloned(),
        busy: *busy,
        error: (*error).clone(),
        login,
        register,
        logout,
        clear_error,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Current auth context. Panics outside an `AuthProvider`.
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth called outside AuthProvider")
}

use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use folio::config::ADMIN_TOKEN_KEY;
use folio::log::{error, info};
use folio::session::{AdminToken, TokenStore};

/// The admin token in browser local storage, the only state this app persists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<AdminToken> {
        LocalStorage::get::<String>(ADMIN_TOKEN_KEY)
            .ok()
            .and_then(AdminToken::parse)
    }

    fn save(&self, token: &AdminToken) {
        if let Err(err) = LocalStorage::set(ADMIN_TOKEN_KEY, token.as_str()) {
            error!("Failed to persist admin token: {err}");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(ADMIN_TOKEN_KEY);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub token: Option<AdminToken>,
    pub sign_in: Callback<AdminToken>,
    pub sign_out: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let token = use_state(|| LocalTokenStore.load());

    let sign_in = {
        let token = token.clone();
        Callback::from(move |new_token: AdminToken| {
            LocalTokenStore.save(&new_token);
            info!("Admin session started");
            token.set(Some(new_token));
        })
    };

    let sign_out = {
        let token = token.clone();
        Callback::from(move |_| {
            LocalTokenStore.clear();
            info!("Admin session cleared");
            token.set(None);
        })
    };

    let context = SessionContext {
        token: (*token).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be used within a SessionProvider")
}

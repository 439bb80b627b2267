use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use folio::auth::{self, LOGIN_SUCCESS, LoginForm, login_error_message};
use folio::config::{LOGIN_REDIRECT_DELAY, as_millis};
use folio::log::{info, warn};

use crate::providers::{api, use_session, use_theme};
use crate::routes::Route;

pub(crate) const CARD_CLASSES: &str = "w-full max-w-md p-8 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl shadow-sm";
pub(crate) const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// `oninput` handler writing the input's value into `state`.
pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlInputElement>().value());
    })
}

#[function_component(AdminLoginPage)]
pub fn admin_login_page() -> Html {
    let theme = use_theme();
    let session = use_session();
    let navigator = use_navigator();
    let service = use_memo((), |_| api::create());

    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);
    let success_msg = use_state(|| None::<&'static str>);

    let on_submit = {
        let service = service.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        let success_msg = success_msg.clone();
        let sign_in = session.sign_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let form = LoginForm {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let service = service.clone();
            let loading = loading.clone();
            let error_msg = error_msg.clone();
            let success_msg = success_msg.clone();
            let sign_in = sign_in.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error_msg.set(None);
            success_msg.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match auth::login(&*service, &form).await {
                    Ok(token) => {
                        info!("Admin login succeeded");
                        sign_in.emit(token);
                        success_msg.set(Some(LOGIN_SUCCESS));
                        Timeout::new(as_millis(LOGIN_REDIRECT_DELAY), move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::AdminDashboard);
                            }
                        })
                        .forget();
                    }
                    Err(err) => {
                        warn!("Admin login failed: {err}");
                        error_msg.set(Some(login_error_message(&err)));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class={classes!("admin-login", theme.theme.as_str(), "flex", "justify-center", "py-20", "px-4")}>
            <div class={CARD_CLASSES}>
                <h1 class="text-2xl font-bold mb-1">{ "Admin Login" }</h1>
                <p class="text-sm text-gray-600 dark:text-gray-400 mb-6">{ "Manage your portfolio projects" }</p>

                <form onsubmit={on_submit} class="space-y-4">
                    if let Some(error) = error_msg.as_ref() {
                        <div class="p-3 bg-red-50 border border-red-200 rounded-md text-sm text-red-700">{ error }</div>
                    }
                    if let Some(success) = *success_msg {
                        <div class="p-3 bg-green-50 border border-green-200 rounded-md text-sm text-green-700">{ success }</div>
                    }

                    <div>
                        <label for="email" class="block text-sm font-medium mb-1">{ "Email" }</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            class={INPUT_CLASSES}
                            placeholder="admin@portfolio.com"
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                            required={true}
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium mb-1">{ "Password" }</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            class={INPUT_CLASSES}
                            placeholder="Enter your password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                            required={true}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full px-4 py-2 text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled={*loading}
                    >
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <p class="mt-6 text-sm text-center">
                    { "Don't have an account? " }
                    <Link<Route> to={Route::AdminRegister} classes="text-blue-600 hover:underline">{ "Register here" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use folio::auth::{self, RegisterForm, register_error_message};
use folio::log::{error, info};

use super::admin_login::{CARD_CLASSES, INPUT_CLASSES, bind_input};
use crate::providers::{api, use_theme};
use crate::routes::Route;

#[function_component(AdminRegisterPage)]
pub fn admin_register_page() -> Html {
    let theme = use_theme();
    let navigator = use_navigator();
    let service = use_memo((), |_| api::create());

    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let on_submit = {
        let service = service.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let loading = loading.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let form = RegisterForm {
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm_password).clone(),
            };
            let service = service.clone();
            let loading = loading.clone();
            let error_msg = error_msg.clone();
            let navigator = navigator.clone();

            error_msg.set(None);
            loading.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match auth::register(&*service, &form).await {
                    Ok(()) => {
                        info!("Admin account registered");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::AdminLogin);
                        }
                    }
                    Err(err) => {
                        error!("Admin register failed: {err}");
                        error_msg.set(Some(register_error_message(&err)));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class={classes!("admin-login", theme.theme.as_str(), "flex", "justify-center", "py-20", "px-4")}>
            <div class={CARD_CLASSES}>
                <h1 class="text-2xl font-bold mb-1">{ "Admin Register" }</h1>
                <p class="text-sm text-gray-600 dark:text-gray-400 mb-6">{ "Create your admin account" }</p>

                <form onsubmit={on_submit} class="space-y-4">
                    if let Some(error) = error_msg.as_ref() {
                        <div class="p-3 bg-red-50 border border-red-200 rounded-md text-sm text-red-700">{ error }</div>
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
                            placeholder="Enter password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                            required={true}
                        />
                    </div>
                    <div>
                        <label for="confirmPassword" class="block text-sm font-medium mb-1">{ "Confirm Password" }</label>
                        <input
                            type="password"
                            id="confirmPassword"
                            name="confirmPassword"
                            class={INPUT_CLASSES}
                            placeholder="Confirm password"
                            value={(*confirm_password).clone()}
                            oninput={bind_input(&confirm_password)}
                            required={true}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full px-4 py-2 text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50"
                        disabled={*loading}
                    >
                        { if *loading { "Registering..." } else { "Register" } }
                    </button>
                </form>

                <p class="mt-6 text-sm text-center">
                    { "Already have an account? " }
                    <Link<Route> to={Route::AdminLogin} classes="text-blue-600 hover:underline">{ "Login here" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}

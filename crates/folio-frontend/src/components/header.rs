use yew::prelude::*;
use yew_router::prelude::*;

use crate::providers::theme::Theme;
use crate::providers::use_theme;
use crate::routes::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let theme = use_theme();

    let on_toggle = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <header class="sticky top-0 z-40 border-b border-gray-200 dark:border-gray-700 bg-white/90 dark:bg-gray-900/90 backdrop-blur">
            <nav class="max-w-6xl mx-auto flex items-center justify-between px-4 py-3">
                <Link<Route> to={Route::Home} classes="text-lg font-bold">
                    { "Portfolio" }
                </Link<Route>>
                <div class="flex items-center space-x-4 text-sm">
                    <a href="/#projects" class="hover:text-blue-600">{ "Projects" }</a>
                    <a href="/#contact" class="hover:text-blue-600">{ "Contact" }</a>
                    <Link<Route> to={Route::AdminLogin} classes="hover:text-blue-600">
                        { "Admin" }
                    </Link<Route>>
                    <button
                        class="px-3 py-1.5 rounded-md border border-gray-300 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-800"
                        onclick={on_toggle}
                        aria-label="Toggle theme"
                    >
                        { match theme.theme {
                            Theme::Light => "🌙",
                            Theme::Dark => "☀️",
                        } }
                    </button>
                </div>
            </nav>
        </header>
    }
}

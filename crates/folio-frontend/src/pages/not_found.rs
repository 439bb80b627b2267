use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="py-24 text-center">
            <h1 class="text-3xl font-bold mb-4">{ "404 Not Found" }</h1>
            <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                { "Back to the portfolio" }
            </Link<Route>>
        </div>
    }
}

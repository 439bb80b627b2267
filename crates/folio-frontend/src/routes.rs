use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    AdminDashboardPage, AdminLoginPage, AdminRegisterPage, HomePage, NotFoundPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    AdminLogin,
    #[at("/admin/register")]
    AdminRegister,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::AdminLogin => html! { <AdminLoginPage /> },
        Route::AdminRegister => html! { <AdminRegisterPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

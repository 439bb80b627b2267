use yew::prelude::*;

use crate::components::{Contact, Hero, Projects};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <Projects />
            <Contact />
        </>
    }
}

use yew::prelude::*;

use folio::config::{CV_FILE_NAME, CV_PATH};

use crate::browser;
use crate::providers::use_theme;

#[function_component(Hero)]
pub fn hero() -> Html {
    let theme = use_theme();

    let download_cv = Callback::from(|_: MouseEvent| browser::download(CV_PATH, CV_FILE_NAME));

    html! {
        <section class={classes!("hero", theme.theme.as_str(), "py-24", "px-4", "text-center")}>
            <div class="max-w-3xl mx-auto">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">{ "Hi, I'm Ajakaiye Oluwatomisin" }</h1>
                <p class="text-xl text-gray-600 dark:text-gray-300 mb-6">
                    { "Full-Stack Developer | Building beautiful and functional web experiences" }
                </p>
                <p class="text-gray-600 dark:text-gray-400 mb-8 leading-relaxed">
                    { "I specialize in creating responsive, scalable web applications using modern technologies. \
                       With expertise in React, Node.js, and MongoDB, I turn ideas into reality with clean, \
                       efficient code and a passion for excellence." }
                </p>
                <div class="flex flex-wrap justify-center gap-3">
                    <a href="#projects" class="px-5 py-2.5 rounded-md bg-blue-600 text-white hover:bg-blue-700">
                        { "View My Work" }
                    </a>
                    <a href="#contact" class="px-5 py-2.5 rounded-md border border-blue-600 text-blue-600 dark:text-blue-400 hover:bg-blue-50 dark:hover:bg-gray-800">
                        { "Get In Touch" }
                    </a>
                    <button onclick={download_cv} class="px-5 py-2.5 rounded-md bg-blue-600 text-white hover:bg-blue-700">
                        { "📥 Download CV" }
                    </button>
                </div>
            </div>
        </section>
    }
}

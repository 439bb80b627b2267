use std::rc::Rc;

use yew::prelude::*;

use folio::data::Project;
use folio::gallery::{CardImage, ImageFailures, card_image, load_projects};
use folio::id::ProjectId;

use crate::providers::{api, use_theme};

const CARD_CLASSES: &str = "relative flex flex-col bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl overflow-hidden shadow-sm";
const LINK_CLASSES: &str = "px-3 py-1.5 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700";

/// Failed images for the whole gallery, updated through a reducer so that several
/// cards failing in the same tick all stick.
#[derive(Default)]
struct FailedImages(ImageFailures);

impl Reducible for FailedImages {
    type Action = ProjectId;

    fn reduce(self: Rc<Self>, id: ProjectId) -> Rc<Self> {
        if self.0.has_failed(&id) {
            return self;
        }
        let mut failures = self.0.clone();
        failures.mark_failed(id);
        Rc::new(Self(failures))
    }
}

fn project_card(project: &Project, failures: &ImageFailures, on_image_error: &Callback<ProjectId>) -> Html {
    let image = match card_image(project, failures) {
        CardImage::Image { src, alt } => {
            let id = project.id.clone();
            html! {
                <img
                    class="w-full h-48 object-cover"
                    src={src.to_string()}
                    alt={alt.to_string()}
                    onerror={on_image_error.reform(move |_: Event| id.clone())}
                />
            }
        }
        CardImage::Placeholder { title } => html! {
            <div class="image-placeholder w-full h-48 flex items-center justify-center bg-gradient-to-br from-blue-500 to-purple-600 text-white font-semibold text-center px-4">
                <span>{ title }</span>
            </div>
        },
    };

    html! {
        <div key={project.id.to_string()} class={CARD_CLASSES}>
            <div class="relative">
                { image }
                if project.featured {
                    <span class="absolute top-3 right-3 px-2 py-1 text-xs font-semibold rounded bg-yellow-400 text-gray-900">
                        { "Featured" }
                    </span>
                }
            </div>
            <div class="flex flex-col flex-1 p-5">
                <h3 class="text-lg font-semibold mb-2">{ &project.title }</h3>
                <p class="text-sm text-gray-600 dark:text-gray-400 mb-4 flex-1">{ &project.description }</p>
                <div class="flex flex-wrap gap-1 mb-4">
                    { for project.technologies.iter().map(|tech| html! {
                        <span class="px-2 py-0.5 text-xs rounded bg-gray-100 dark:bg-gray-700">{ tech }</span>
                    }) }
                </div>
                <div class="flex gap-2">
                    <a href={project.live_link.clone()} target="_blank" rel="noopener noreferrer" class={LINK_CLASSES}>
                        { "Live Demo" }
                    </a>
                    <a href={project.github_link.clone()} target="_blank" rel="noopener noreferrer" class={LINK_CLASSES}>
                        { "Source Code" }
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let theme = use_theme();
    let service = use_memo((), |_| api::create());
    let projects = use_state(Vec::<Project>::new);
    let loading = use_state(|| true);
    let failures = use_reducer(FailedImages::default);

    {
        let service = service.clone();
        let projects = projects.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                projects.set(load_projects(&*service).await);
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! {
            <div class="loading py-16 text-center text-gray-500">{ "Loading projects..." }</div>
        };
    }

    let on_image_error = {
        let dispatcher = failures.dispatcher();
        Callback::from(move |id: ProjectId| dispatcher.dispatch(id))
    };

    html! {
        <section id="projects" class={classes!("projects", theme.theme.as_str(), "py-20", "px-4")}>
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-2">{ "Featured Projects" }</h2>
                <p class="text-center text-gray-600 dark:text-gray-400 mb-10">
                    { "Check out some of my recent work and projects" }
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for projects.iter().map(|project| project_card(project, &failures.0, &on_image_error)) }
                </div>
            </div>
        </section>
    }
}

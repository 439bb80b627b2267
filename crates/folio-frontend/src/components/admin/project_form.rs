use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use folio::dashboard::{Editor, ProjectField, ProjectForm};

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500";

pub enum ProjectFormAction {
    Edit(ProjectField, String),
    SetFeatured(bool),
    Replace(ProjectForm),
}

/// Reducer state behind the add/edit form.
#[derive(Default)]
pub struct ProjectFormState(pub ProjectForm);

impl Reducible for ProjectFormState {
    type Action = ProjectFormAction;

    fn reduce(self: Rc<Self>, action: ProjectFormAction) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            ProjectFormAction::Edit(field, value) => form.set(field, value),
            ProjectFormAction::SetFeatured(featured) => form.featured = featured,
            ProjectFormAction::Replace(replacement) => form = replacement,
        }
        Rc::new(Self(form))
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectFormViewProps {
    pub form: ProjectForm,
    pub editor: Editor,
    pub saving: bool,
    pub on_change: Callback<ProjectFormAction>,
    pub on_submit: Callback<()>,
}

// (field, input id, label, input type, placeholder, required)
const TEXT_FIELDS: [(ProjectField, &str, &str, &str, &str, bool); 5] = [
    (ProjectField::Title, "title", "Project Title *", "text", "e.g., E-commerce Platform", true),
    (ProjectField::Image, "image", "Image URL *", "url", "https://example.com/image.jpg", true),
    (ProjectField::LiveLink, "liveLink", "Live Link *", "url", "https://project.com", true),
    (ProjectField::GithubLink, "githubLink", "GitHub Link *", "url", "https://github.com/username/project", true),
    (ProjectField::Technologies, "technologies", "Technologies (comma-separated) *", "text", "React, Node.js, MongoDB", false),
];

#[function_component(ProjectFormView)]
pub fn project_form_view(props: &ProjectFormViewProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let text_input = |(field, id, label, kind, placeholder, required): (ProjectField, &'static str, &'static str, &'static str, &'static str, bool)| {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(ProjectFormAction::Edit(field, value));
        });
        html! {
            <div>
                <label for={id} class="block text-sm font-medium mb-1">{ label }</label>
                <input
                    type={kind}
                    id={id}
                    name={id}
                    class={INPUT_CLASSES}
                    placeholder={placeholder}
                    value={props.form.get(field).to_string()}
                    oninput={oninput}
                    required={required}
                />
            </div>
        }
    };

    let on_description = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            on_change.emit(ProjectFormAction::Edit(ProjectField::Description, value));
        })
    };

    let on_featured = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            on_change.emit(ProjectFormAction::SetFeatured(checked));
        })
    };

    html! {
        <form onsubmit={on_submit} class="mt-6 p-6 space-y-4 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl">
            <h2 class="text-xl font-semibold">{ props.editor.heading() }</h2>

            { text_input(TEXT_FIELDS[0]) }

            <div>
                <label for="description" class="block text-sm font-medium mb-1">{ "Description *" }</label>
                <textarea
                    id="description"
                    name="description"
                    class={INPUT_CLASSES}
                    placeholder="Describe your project"
                    rows="4"
                    value={props.form.description.clone()}
                    oninput={on_description}
                    required={true}
                />
            </div>

            { for TEXT_FIELDS[1..].iter().map(|field| text_input(*field)) }

            <div class="flex items-center space-x-2">
                <input
                    type="checkbox"
                    id="featured"
                    name="featured"
                    checked={props.form.featured}
                    onchange={on_featured}
                />
                <label for="featured" class="text-sm">{ "Mark as featured" }</label>
            </div>

            <button
                type="submit"
                class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50"
                disabled={props.saving}
            >
                { props.editor.submit_label(props.saving) }
            </button>
        </form>
    }
}

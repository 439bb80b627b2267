use yew::prelude::*;

use folio::config::PREVIEW_CHARS;
use folio::data::Project;
use folio::id::ProjectId;
use folio::text::preview;

#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub projects: Vec<Project>,
    pub on_edit: Callback<Project>,
    pub on_delete: Callback<ProjectId>,
}

#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    html! {
        <div class="mt-10">
            <h2 class="text-xl font-semibold mb-4">{ format!("Your Projects ({})", props.projects.len()) }</h2>

            if props.projects.is_empty() {
                <p class="text-gray-500">{ "No projects yet. Add your first project above!" }</p>
            } else {
                <div class="space-y-3">
                    { for props.projects.iter().map(|project| {
                        let on_edit = {
                            let project = project.clone();
                            props.on_edit.reform(move |_: MouseEvent| project.clone())
                        };
                        let on_delete = {
                            let id = project.id.clone();
                            props.on_delete.reform(move |_: MouseEvent| id.clone())
                        };

                        html! {
                            <div key={project.id.to_string()} class="flex items-start justify-between gap-4 p-4 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg">
                                <div>
                                    <h3 class="font-semibold">{ &project.title }</h3>
                                    <p class="text-sm text-gray-600 dark:text-gray-400">
                                        { preview(&project.description, PREVIEW_CHARS) }
                                    </p>
                                    <div class="mt-2 space-x-3 text-sm">
                                        <a href={project.live_link.clone()} target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">{ "Live" }</a>
                                        <a href={project.github_link.clone()} target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">{ "GitHub" }</a>
                                    </div>
                                </div>
                                <div class="flex shrink-0 gap-2">
                                    <button class="px-3 py-1.5 text-sm rounded-md bg-gray-600 text-white hover:bg-gray-700" onclick={on_edit}>
                                        { "Edit" }
                                    </button>
                                    <button class="px-3 py-1.5 text-sm rounded-md bg-red-600 text-white hover:bg-red-700" onclick={on_delete}>
                                        { "Delete" }
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}

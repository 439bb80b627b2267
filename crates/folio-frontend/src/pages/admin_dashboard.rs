use yew::prelude::*;
use yew_router::prelude::*;

use folio::api::ApiError;
use folio::async_callback;
use folio::dashboard::{
    self, DELETE_MESSAGE_FAILED, DELETE_PROJECT_FAILED, Editor, FailureOutcome, ProjectForm,
    UPDATE_STATUS_FAILED, save_error_message,
};
use folio::data::{ContactMessage, Project};
use folio::id::ProjectId;
use folio::log::{error, info};
use folio::service::PortfolioService;
use folio::session::AdminToken;

use crate::browser::BrowserPrompter;
use crate::components::admin::{
    MessageDetail, MessageList, ProjectFormAction, ProjectFormState, ProjectFormView, ProjectList,
};
use crate::providers::session::SessionContext;
use crate::providers::{api, use_session, use_theme};
use crate::routes::Route;

/// Alerts about a failed admin call, or ends the session if the backend rejected the token.
fn report_failure(session: &SessionContext, err: &ApiError, message: &str) {
    error!("{message}: {err}");
    let sign_out = session.sign_out.clone();
    FailureOutcome::from_error(err, message)
        .carry_out(&BrowserPrompter, move || sign_out.emit(()));
}

/// Renders the dashboard only while a token is held; otherwise sends the visitor to login.
#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    use_effect_with(session.token.is_some(), move |authenticated| {
        if !*authenticated {
            if let Some(navigator) = navigator {
                navigator.replace(&Route::AdminLogin);
            }
        }
    });

    match session.token.clone() {
        Some(token) => html! { <Dashboard {token} /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct DashboardProps {
    token: AdminToken,
}

#[function_component(Dashboard)]
fn admin_dashboard(props: &DashboardProps) -> Html {
    let theme = use_theme();
    let session = use_session();
    let service = use_memo((), |_| api::create());

    let projects = use_state(Vec::<Project>::new);
    let messages = use_state(Vec::<ContactMessage>::new);
    let editor = use_state(Editor::default);
    let form = use_reducer(ProjectFormState::default);
    let saving = use_state(|| false);
    let selected = use_state(|| None::<ContactMessage>);
    let token = props.token.clone();

    let refresh = async_callback!([service, token, projects, messages, session] {
        let (project_result, message_result) =
            futures::join!(service.list_projects(), service.list_messages(&token));

        match project_result {
            Ok(list) => projects.set(list),
            Err(err) => error!("Error fetching projects: {err}"),
        }
        match message_result {
            Ok(list) => messages.set(list),
            Err(err) => match FailureOutcome::from_error(&err, "Error fetching messages") {
                FailureOutcome::SignOut => session.sign_out.emit(()),
                FailureOutcome::Alert(message) => error!("{message}: {err}"),
            },
        }
    });

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| refresh.emit(()));
    }

    let on_logout = {
        let sign_out = session.sign_out.clone();
        Callback::from(move |_: MouseEvent| sign_out.emit(()))
    };

    let on_toggle_form = {
        let editor = editor.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            editor.set(editor.toggled());
            form.dispatch(ProjectFormAction::Replace(ProjectForm::default()));
        })
    };

    let on_form_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |action: ProjectFormAction| dispatcher.dispatch(action))
    };

    let on_save = {
        let service = service.clone();
        let token = token.clone();
        let editor = editor.clone();
        let form = form.clone();
        let saving = saving.clone();
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            if *saving {
                return;
            }
            saving.set(true);

            let current_editor = (*editor).clone();
            let current_form = form.0.clone();
            let service = service.clone();
            let token = token.clone();
            let editor = editor.clone();
            let dispatcher = form.dispatcher();
            let saving = saving.clone();
            let session = session.clone();
            let refresh = refresh.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match dashboard::save_project(&*service, &token, &current_editor, &current_form)
                    .await
                {
                    Ok(project) => {
                        info!("Saved project {}", project.id);
                        dispatcher.dispatch(ProjectFormAction::Replace(ProjectForm::default()));
                        editor.set(Editor::Closed);
                        refresh.emit(());
                    }
                    Err(err) => report_failure(&session, &err, &save_error_message(&err)),
                }
                saving.set(false);
            });
        })
    };

    let on_edit = {
        let editor = editor.clone();
        let dispatcher = form.dispatcher();
        Callback::from(move |project: Project| {
            dispatcher.dispatch(ProjectFormAction::Replace(ProjectForm::from_project(&project)));
            editor.set(Editor::Editing(project.id));
        })
    };

    let on_delete_project = {
        let service = service.clone();
        let token = token.clone();
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: ProjectId| {
            let service = service.clone();
            let token = token.clone();
            let session = session.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match dashboard::delete_project(&*service, &BrowserPrompter, &token, &id).await {
                    Ok(true) => {
                        info!("Deleted project {id}");
                        refresh.emit(());
                    }
                    Ok(false) => {}
                    Err(err) => report_failure(&session, &err, DELETE_PROJECT_FAILED),
                }
            });
        })
    };

    let on_select_message = {
        let selected = selected.clone();
        Callback::from(move |message: ContactMessage| selected.set(Some(message)))
    };

    let on_back = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let on_toggle_attended = async_callback!([service, token, selected, session, refresh] {
        let Some(message) = (*selected).clone() else {
            return;
        };
        match dashboard::toggle_attended(&*service, &token, &message).await {
            Ok(updated) => {
                selected.set(Some(updated));
                refresh.emit(());
            }
            Err(err) => report_failure(&session, &err, UPDATE_STATUS_FAILED),
        }
    });

    let on_delete_message = async_callback!([service, token, selected, session, refresh] {
        let Some(message) = (*selected).clone() else {
            return;
        };
        match dashboard::delete_message(&*service, &BrowserPrompter, &token, &message.id).await {
            Ok(true) => {
                info!("Deleted message {}", message.id);
                selected.set(None);
                refresh.emit(());
            }
            Ok(false) => {}
            Err(err) => report_failure(&session, &err, DELETE_MESSAGE_FAILED),
        }
    });

    let messages_view = match (*selected).clone() {
        _ if messages.is_empty() => html! {
            <p class="text-gray-500">{ "No messages yet." }</p>
        },
        Some(message) => html! {
            <MessageDetail
                {message}
                {on_back}
                {on_toggle_attended}
                on_delete={on_delete_message}
            />
        },
        None => html! {
            <MessageList messages={(*messages).clone()} on_select={on_select_message} />
        },
    };

    html! {
        <div class={classes!("admin-dashboard", theme.theme.as_str(), "max-w-5xl", "mx-auto", "py-10", "px-4")}>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">{ "Admin Dashboard" }</h1>
                <button class="px-4 py-2 text-sm rounded-md bg-gray-700 text-white hover:bg-gray-800" onclick={on_logout}>
                    { "Logout" }
                </button>
            </div>

            <button class="px-4 py-2 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700" onclick={on_toggle_form}>
                { if editor.is_open() { "Cancel" } else { "Add New Project" } }
            </button>

            if editor.is_open() {
                <ProjectFormView
                    form={form.0.clone()}
                    editor={(*editor).clone()}
                    saving={*saving}
                    on_change={on_form_change}
                    on_submit={on_save}
                />
            }

            <ProjectList
                projects={(*projects).clone()}
                {on_edit}
                on_delete={on_delete_project}
            />

            <div class="mt-12">
                <h2 class="text-xl font-semibold mb-4">{ format!("Contact Messages ({})", messages.len()) }</h2>
                { messages_view }
            </div>
        </div>
    }
}

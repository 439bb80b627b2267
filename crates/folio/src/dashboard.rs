//! Admin dashboard: the project editor and the message triage workflows.

use crate::api::{ApiError, ApiResult};
use crate::data::{ContactMessage, Project, ProjectPayload};
use crate::id::{MessageId, ProjectId};
use crate::log::warn;
use crate::service::PortfolioService;
use crate::session::AdminToken;

pub const CONFIRM_DELETE_PROJECT: &str = "Are you sure you want to delete this project?";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this message?";
pub const DELETE_PROJECT_FAILED: &str = "Error deleting project";
pub const DELETE_MESSAGE_FAILED: &str = "Error deleting message";
pub const UPDATE_STATUS_FAILED: &str = "Error updating message status";

/// Blocking browser dialogs.
pub trait Prompter {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Splits free-text technologies on commas, dropping blanks.
pub fn parse_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_technologies(technologies: &[String]) -> String {
    technologies.join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Image,
    LiveLink,
    GithubLink,
    Technologies,
}

/// The add/edit project form, technologies kept as the raw text input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_link: String,
    pub github_link: String,
    pub technologies: String,
    pub featured: bool,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            live_link: project.live_link.clone(),
            github_link: project.github_link.clone(),
            technologies: join_technologies(&project.technologies),
            featured: project.featured,
        }
    }

    pub fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Title => &self.title,
            ProjectField::Description => &self.description,
            ProjectField::Image => &self.image,
            ProjectField::LiveLink => &self.live_link,
            ProjectField::GithubLink => &self.github_link,
            ProjectField::Technologies => &self.technologies,
        }
    }

    pub fn set(&mut self, field: ProjectField, value: String) {
        let slot = match field {
            ProjectField::Title => &mut self.title,
            ProjectField::Description => &mut self.description,
            ProjectField::Image => &mut self.image,
            ProjectField::LiveLink => &mut self.live_link,
            ProjectField::GithubLink => &mut self.github_link,
            ProjectField::Technologies => &mut self.technologies,
        };
        *slot = value;
    }

    pub fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            live_link: self.live_link.clone(),
            github_link: self.github_link.clone(),
            technologies: parse_technologies(&self.technologies),
            featured: self.featured,
        }
    }
}

/// Whether the project form is shown, and for which record.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Editor {
    #[default]
    Closed,
    Adding,
    Editing(ProjectId),
}

impl Editor {
    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    /// The "Add New Project" / "Cancel" button.
    pub fn toggled(&self) -> Self {
        if self.is_open() {
            Editor::Closed
        } else {
            Editor::Adding
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Editor::Editing(_) => "Edit Project",
            _ => "Add New Project",
        }
    }

    pub fn submit_label(&self, saving: bool) -> &'static str {
        match (saving, self) {
            (true, _) => "Saving...",
            (false, Editor::Editing(_)) => "Update Project",
            (false, _) => "Add Project",
        }
    }
}

/// Creates or updates depending on the editor state.
pub async fn save_project<S>(
    service: &S,
    token: &AdminToken,
    editor: &Editor,
    form: &ProjectForm,
) -> ApiResult<Project>
where
    S: PortfolioService + ?Sized,
{
    let payload = form.to_payload();
    match editor {
        Editor::Editing(id) => service.update_project(token, id, &payload).await,
        _ => service.create_project(token, &payload).await,
    }
}

pub fn save_error_message(error: &ApiError) -> String {
    format!("Error saving project: {}", error.detail())
}

/// Deletes after confirmation. `Ok(false)` means the admin declined.
pub async fn delete_project<S, P>(
    service: &S,
    prompter: &P,
    token: &AdminToken,
    id: &ProjectId,
) -> ApiResult<bool>
where
    S: PortfolioService + ?Sized,
    P: Prompter + ?Sized,
{
    if !prompter.confirm(CONFIRM_DELETE_PROJECT) {
        return Ok(false);
    }
    service.delete_project(token, id).await?;
    Ok(true)
}

/// Deletes after confirmation. `Ok(false)` means the admin declined.
pub async fn delete_message<S, P>(
    service: &S,
    prompter: &P,
    token: &AdminToken,
    id: &MessageId,
) -> ApiResult<bool>
where
    S: PortfolioService + ?Sized,
    P: Prompter + ?Sized,
{
    if !prompter.confirm(CONFIRM_DELETE_MESSAGE) {
        return Ok(false);
    }
    service.delete_message(token, id).await?;
    Ok(true)
}

/// Flips the attended flag and returns the record as the backend now has it.
///
/// An unreadable response body still means the update was applied, so the local record
/// with the flag flipped stands in for it.
pub async fn toggle_attended<S>(
    service: &S,
    token: &AdminToken,
    message: &ContactMessage,
) -> ApiResult<ContactMessage>
where
    S: PortfolioService + ?Sized,
{
    let attended = !message.attended;
    match service
        .set_message_attended(token, &message.id, attended)
        .await
    {
        Err(ApiError::ParseError(err)) => {
            warn!("Unreadable attended update for {}: {err}", message.id);
            Ok(ContactMessage {
                attended,
                ..message.clone()
            })
        }
        result => result,
    }
}

/// What the dashboard does after an authenticated call fails.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureOutcome {
    /// The backend rejected the token: drop the session and go back to login.
    SignOut,
    /// Anything else is reported with a blocking alert.
    Alert(String),
}

impl FailureOutcome {
    pub fn from_error(error: &ApiError, message: impl Into<String>) -> Self {
        if error.is_unauthorized() {
            FailureOutcome::SignOut
        } else {
            FailureOutcome::Alert(message.into())
        }
    }

    pub fn carry_out<P>(self, prompter: &P, sign_out: impl FnOnce())
    where
        P: Prompter + ?Sized,
    {
        match self {
            FailureOutcome::SignOut => {
                warn!("Admin token rejected, signing out");
                sign_out();
            }
            FailureOutcome::Alert(message) => prompter.alert(&message),
        }
    }
}

pub fn attended_label(attended: bool) -> &'static str {
    if attended {
        "✓ Attended"
    } else {
        "○ Not Attended"
    }
}

pub fn toggle_label(attended: bool) -> &'static str {
    if attended {
        "Mark as Not Attended"
    } else {
        "Mark as Attended"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use crate::testing::{self, Call, MockService};

    struct ScriptedPrompter {
        answer: bool,
        asked: Cell<usize>,
        alerts: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(0),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn token() -> AdminToken {
        AdminToken::new("secret")
    }

    #[test]
    fn technologies_are_trimmed_and_blank_free() {
        assert_eq!(parse_technologies(" A ,B,, ,C "), vec!["A", "B", "C"]);
        assert!(parse_technologies("").is_empty());
    }

    #[tokio::test]
    async fn editing_round_trips_technologies() {
        let service = MockService::new();
        let project = testing::project("p1", &["A", "B"]);

        let mut form = ProjectForm::from_project(&project);
        assert_eq!(form.technologies, "A, B");

        form.set(ProjectField::Technologies, "A, C, D".to_string());
        let editor = Editor::Editing(project.id.clone());
        save_project(&service, &token(), &editor, &form).await.unwrap();

        match &service.calls()[..] {
            [Call::UpdateProject(id, payload)] => {
                assert_eq!(id, &project.id);
                assert_eq!(payload.technologies, vec!["A", "C", "D"]);
            }
            other => panic!("unexpected calls {other:?}"),
        }
        assert_eq!(service.tokens(), vec![token()]);
    }

    #[tokio::test]
    async fn adding_creates() {
        let service = MockService::new();
        let mut form = ProjectForm::default();
        form.set(ProjectField::Title, "New".to_string());
        form.featured = true;

        let created = save_project(&service, &token(), &Editor::Adding, &form)
            .await
            .unwrap();

        assert!(created.featured);
        assert!(matches!(&service.calls()[..], [Call::CreateProject(p)] if p.title == "New"));
    }

    #[tokio::test]
    async fn save_failure_message_includes_server_detail() {
        let service = MockService::failing(400, Some("Title is required"));

        let error = save_project(&service, &token(), &Editor::Adding, &ProjectForm::default())
            .await
            .unwrap_err();

        assert_eq!(
            save_error_message(&error),
            "Error saving project: Title is required"
        );
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let service = MockService::new();
        let prompter = ScriptedPrompter::answering(false);

        let project_deleted = delete_project(&service, &prompter, &token(), &"p1".into())
            .await
            .unwrap();
        let message_deleted = delete_message(&service, &prompter, &token(), &"m1".into())
            .await
            .unwrap();

        assert!(!project_deleted);
        assert!(!message_deleted);
        assert_eq!(prompter.asked.get(), 2);
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_calls_once_with_the_id() {
        let service = MockService::new();
        let prompter = ScriptedPrompter::answering(true);

        delete_project(&service, &prompter, &token(), &"p1".into())
            .await
            .unwrap();
        delete_message(&service, &prompter, &token(), &"m7".into())
            .await
            .unwrap();

        assert_eq!(
            service.calls(),
            vec![
                Call::DeleteProject("p1".into()),
                Call::DeleteMessage("m7".into())
            ]
        );
    }

    #[tokio::test]
    async fn rejected_token_signs_out_without_alerting() {
        let service = MockService::failing(401, Some("Invalid token"));
        let prompter = ScriptedPrompter::answering(true);
        let signed_out = Cell::new(false);

        let error = delete_project(&service, &prompter, &token(), &"p1".into())
            .await
            .unwrap_err();
        let outcome = FailureOutcome::from_error(&error, DELETE_PROJECT_FAILED);
        assert_eq!(outcome, FailureOutcome::SignOut);

        outcome.carry_out(&prompter, || signed_out.set(true));
        assert!(signed_out.get());
        assert!(prompter.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn server_error_alerts_and_keeps_the_session() {
        let service = MockService::failing(500, Some("boom"));
        let prompter = ScriptedPrompter::answering(true);
        let signed_out = Cell::new(false);

        let error = delete_project(&service, &prompter, &token(), &"p1".into())
            .await
            .unwrap_err();
        let outcome = FailureOutcome::from_error(&error, DELETE_PROJECT_FAILED);
        assert_eq!(
            outcome,
            FailureOutcome::Alert("Error deleting project".to_string())
        );

        outcome.carry_out(&prompter, || signed_out.set(true));
        assert!(!signed_out.get());
        assert_eq!(*prompter.alerts.borrow(), vec!["Error deleting project"]);
    }

    #[tokio::test]
    async fn unreadable_toggle_response_keeps_the_local_record() {
        let service = MockService::with_unreadable_bodies();
        let mut message = testing::message("m1");
        message.attended = true;

        let updated = toggle_attended(&service, &token(), &message).await.unwrap();

        assert!(!updated.attended);
        assert_eq!(updated.subject, message.subject);
        assert_eq!(service.calls(), vec![Call::SetAttended("m1".into(), false)]);
    }

    #[tokio::test]
    async fn toggling_flips_the_flag() {
        let service = MockService::new();
        let message = testing::message("m1");

        let updated = toggle_attended(&service, &token(), &message).await.unwrap();

        assert!(updated.attended);
        assert_eq!(service.calls(), vec![Call::SetAttended("m1".into(), true)]);
        assert_eq!(toggle_label(updated.attended), "Mark as Not Attended");
    }

    #[test]
    fn editor_toggle_and_labels() {
        let editor = Editor::default();
        assert!(!editor.is_open());

        let editor = editor.toggled();
        assert_eq!(editor, Editor::Adding);
        assert_eq!(editor.submit_label(false), "Add Project");

        let editing = Editor::Editing("p1".into());
        assert_eq!(editing.heading(), "Edit Project");
        assert_eq!(editing.submit_label(true), "Saving...");
        assert_eq!(editing.toggled(), Editor::Closed);
    }
}

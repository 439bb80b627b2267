//! Recording [`PortfolioService`] double shared by the unit tests.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::TimeZone;

use crate::api::{ApiError, ApiResult, status_error};
use crate::data::{
    ContactMessage, Credentials, NewContactMessage, Project, ProjectPayload, TokenResponse,
};
use crate::id::{MessageId, ProjectId};
use crate::service::PortfolioService;
use crate::session::AdminToken;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SendContact(NewContactMessage),
    ListProjects,
    CreateProject(ProjectPayload),
    UpdateProject(ProjectId, ProjectPayload),
    DeleteProject(ProjectId),
    ListMessages,
    SetAttended(MessageId, bool),
    DeleteMessage(MessageId),
    Login(Credentials),
    Register(Credentials),
}

#[derive(Default)]
pub struct MockService {
    calls: RefCell<Vec<Call>>,
    tokens: RefCell<Vec<AdminToken>>,
    failure: Option<(u16, Option<String>)>,
    unreadable_bodies: bool,
    pub projects: Vec<Project>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call answers with `status` and an optional `{message}` body.
    pub fn failing(status: u16, message: Option<&str>) -> Self {
        Self {
            failure: Some((status, message.map(str::to_string))),
            ..Self::default()
        }
    }

    /// Requests succeed but record-returning responses fail to parse.
    pub fn with_unreadable_bodies() -> Self {
        Self {
            unreadable_bodies: true,
            ..Self::default()
        }
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn tokens(&self) -> Vec<AdminToken> {
        self.tokens.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some((status, message)) => Err(status_error(*status, "/mock", message.clone())
                .unwrap_or(ApiError::UnexpectedStatusCode {
                    status: *status,
                    message: message.clone(),
                })),
            None => Ok(()),
        }
    }

    fn record_authed(&self, token: &AdminToken, call: Call) -> ApiResult<()> {
        self.tokens.borrow_mut().push(token.clone());
        self.record(call)
    }
}

#[async_trait(?Send)]
impl PortfolioService for MockService {
    async fn send_contact(&self, message: &NewContactMessage) -> ApiResult<()> {
        self.record(Call::SendContact(message.clone()))
    }

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.record(Call::ListProjects)?;
        Ok(self.projects.clone())
    }

    async fn create_project(
        &self,
        token: &AdminToken,
        project: &ProjectPayload,
    ) -> ApiResult<Project> {
        self.record_authed(token, Call::CreateProject(project.clone()))?;
        Ok(project_from_payload("new", project))
    }

    async fn update_project(
        &self,
        token: &AdminToken,
        id: &ProjectId,
        project: &ProjectPayload,
    ) -> ApiResult<Project> {
        self.record_authed(token, Call::UpdateProject(id.clone(), project.clone()))?;
        Ok(project_from_payload(id.as_str(), project))
    }

    async fn delete_project(&self, token: &AdminToken, id: &ProjectId) -> ApiResult<()> {
        self.record_authed(token, Call::DeleteProject(id.clone()))
    }

    async fn list_messages(&self, token: &AdminToken) -> ApiResult<Vec<ContactMessage>> {
        self.record_authed(token, Call::ListMessages)?;
        Ok(vec![message("m1")])
    }

    async fn set_message_attended(
        &self,
        token: &AdminToken,
        id: &MessageId,
        attended: bool,
    ) -> ApiResult<ContactMessage> {
        self.record_authed(token, Call::SetAttended(id.clone(), attended))?;
        if self.unreadable_bodies {
            let err = serde_json::from_str::<ContactMessage>("{").unwrap_err();
            return Err(ApiError::ParseError(gloo_net::Error::SerdeError(err)));
        }
        let mut updated = message(id.as_str());
        updated.attended = attended;
        Ok(updated)
    }

    async fn delete_message(&self, token: &AdminToken, id: &MessageId) -> ApiResult<()> {
        self.record_authed(token, Call::DeleteMessage(id.clone()))
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        self.record(Call::Login(credentials.clone()))?;
        Ok(TokenResponse {
            token: "issued-token".to_string(),
        })
    }

    async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        self.record(Call::Register(credentials.clone()))
    }
}

pub fn project(id: &str, technologies: &[&str]) -> Project {
    Project {
        id: id.into(),
        title: format!("Project {id}"),
        description: "A project".to_string(),
        image: format!("https://img.test/{id}.png"),
        live_link: format!("https://live.test/{id}"),
        github_link: format!("https://github.com/test/{id}"),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        featured: false,
    }
}

pub fn message(id: &str) -> ContactMessage {
    ContactMessage {
        id: id.into(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        subject: "Hello".to_string(),
        message: "I would like to work together.".to_string(),
        created_at: Some(chrono::Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap()),
        attended: false,
    }
}

fn project_from_payload(id: &str, payload: &ProjectPayload) -> Project {
    Project {
        id: id.into(),
        title: payload.title.clone(),
        description: payload.description.clone(),
        image: payload.image.clone(),
        live_link: payload.live_link.clone(),
        github_link: payload.github_link.clone(),
        technologies: payload.technologies.clone(),
        featured: payload.featured,
    }
}

//! Typed access to the portfolio backend.
//!
//! [`PortfolioService`] has one method per backend route. Views and the workflows in
//! this crate only ever talk to the trait, which keeps them testable without a browser.

use async_trait::async_trait;

use crate::api::{ApiClient, ApiResult, HttpApiClient};
use crate::data::{
    AttendedUpdate, ContactMessage, Credentials, NewContactMessage, Project, ProjectPayload,
    TokenResponse,
};
use crate::id::{MessageId, ProjectId};
use crate::session::AdminToken;

/// Every backend operation the application uses.
///
/// Methods taking an [`AdminToken`] are sent with it as a bearer credential.
#[async_trait(?Send)]
pub trait PortfolioService {
    /// `POST /api/contact/send`
    async fn send_contact(&self, message: &NewContactMessage) -> ApiResult<()>;

    /// `GET /api/projects`
    async fn list_projects(&self) -> ApiResult<Vec<Project>>;

    /// `POST /api/projects`
    async fn create_project(
        &self,
        token: &AdminToken,
        project: &ProjectPayload,
    ) -> ApiResult<Project>;

    /// `PUT /api/projects/:id`
    async fn update_project(
        &self,
        token: &AdminToken,
        id: &ProjectId,
        project: &ProjectPayload,
    ) -> ApiResult<Project>;

    /// `DELETE /api/projects/:id`
    async fn delete_project(&self, token: &AdminToken, id: &ProjectId) -> ApiResult<()>;

    /// `GET /api/contact/all`
    async fn list_messages(&self, token: &AdminToken) -> ApiResult<Vec<ContactMessage>>;

    /// `PATCH /api/contact/:id`
    async fn set_message_attended(
        &self,
        token: &AdminToken,
        id: &MessageId,
        attended: bool,
    ) -> ApiResult<ContactMessage>;

    /// `DELETE /api/contact/:id`
    async fn delete_message(&self, token: &AdminToken, id: &MessageId) -> ApiResult<()>;

    /// `POST /api/admin/login`
    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse>;

    /// `POST /api/admin/register`
    async fn register(&self, credentials: &Credentials) -> ApiResult<()>;
}

/// [`PortfolioService`] over HTTP.
pub struct HttpPortfolioService {
    client: HttpApiClient,
}

impl HttpPortfolioService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: HttpApiClient::new(base_url),
        }
    }
}

#[async_trait(?Send)]
impl PortfolioService for HttpPortfolioService {
    async fn send_contact(&self, message: &NewContactMessage) -> ApiResult<()> {
        self.client.post_status("/api/contact/send", message).await
    }

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.client.get("/api/projects").await
    }

    async fn create_project(
        &self,
        token: &AdminToken,
        project: &ProjectPayload,
    ) -> ApiResult<Project> {
        self.client
            .authorized(token)
            .post("/api/projects", project)
            .await
    }

    async fn update_project(
        &self,
        token: &AdminToken,
        id: &ProjectId,
        project: &ProjectPayload,
    ) -> ApiResult<Project> {
        self.client
            .authorized(token)
            .put(&format!("/api/projects/{id}"), project)
            .await
    }

    async fn delete_project(&self, token: &AdminToken, id: &ProjectId) -> ApiResult<()> {
        self.client
            .authorized(token)
            .delete_status(&format!("/api/projects/{id}"))
            .await
    }

    async fn list_messages(&self, token: &AdminToken) -> ApiResult<Vec<ContactMessage>> {
        self.client.authorized(token).get("/api/contact/all").await
    }

    async fn set_message_attended(
        &self,
        token: &AdminToken,
        id: &MessageId,
        attended: bool,
    ) -> ApiResult<ContactMessage> {
        self.client
            .authorized(token)
            .patch(&format!("/api/contact/{id}"), &AttendedUpdate { attended })
            .await
    }

    async fn delete_message(&self, token: &AdminToken, id: &MessageId) -> ApiResult<()> {
        self.client
            .authorized(token)
            .delete_status(&format!("/api/contact/{id}"))
            .await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        self.client.post("/api/admin/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> ApiResult<()> {
        self.client
            .post_status("/api/admin/register", credentials)
            .await
    }
}

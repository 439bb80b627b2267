use gloo_net::http::Response;
use std::collections::HashMap;

use crate::data::ServerMessage;
use crate::session::AdminToken;

#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {endpoint}")]
    NotFound {
        endpoint: String,
        message: Option<String>,
    },
    #[error("Bad Request: {}", .message.as_deref().unwrap_or("invalid request"))]
    BadRequest { message: Option<String> },
    #[error("Unauthorized Access")]
    UnauthorizedAccess { message: Option<String> },
    #[error("Forbidden Access")]
    ForbiddenAccess { message: Option<String> },
    #[error("Internal Server Error ({status})")]
    InternalServerError {
        status: u16,
        message: Option<String>,
    },
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
    #[error("Unexpected response status code: {status}")]
    UnexpectedStatusCode {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// HTTP status of the failed response, `None` for transport and encoding failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::BadRequest { .. } => Some(400),
            ApiError::UnauthorizedAccess { .. } => Some(401),
            ApiError::ForbiddenAccess { .. } => Some(403),
            ApiError::InternalServerError { status, .. }
            | ApiError::UnexpectedStatusCode { status, .. } => Some(*status),
            ApiError::NetworkError(_) | ApiError::ParseError(_) | ApiError::SerializeError(_) => {
                None
            }
        }
    }

    /// The message the backend put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { message, .. }
            | ApiError::BadRequest { message }
            | ApiError::UnauthorizedAccess { message }
            | ApiError::ForbiddenAccess { message }
            | ApiError::InternalServerError { message, .. }
            | ApiError::UnexpectedStatusCode { message, .. } => message.as_deref(),
            ApiError::NetworkError(_) | ApiError::ParseError(_) | ApiError::SerializeError(_) => {
                None
            }
        }
    }

    /// The backend no longer accepts the stored token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::UnauthorizedAccess { .. })
    }

    /// Server message when present, otherwise the error's own description.
    pub fn detail(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Maps a non-success status to its error, `None` for 2xx.
pub fn status_error(status: u16, endpoint: &str, message: Option<String>) -> Option<ApiError> {
    let error = match status {
        200..=299 => return None,
        400 => ApiError::BadRequest { message },
        401 => ApiError::UnauthorizedAccess { message },
        403 => ApiError::ForbiddenAccess { message },
        404 => ApiError::NotFound {
            endpoint: endpoint.to_string(),
            message,
        },
        500..=599 => ApiError::InternalServerError { status, message },
        status => ApiError::UnexpectedStatusCode { status, message },
    };
    Some(error)
}

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    // Error bodies are optional and not always JSON
    let message = response
        .json::<ServerMessage>()
        .await
        .ok()
        .and_then(ServerMessage::into_text);

    match status_error(status, endpoint, message) {
        Some(error) => Err(error),
        None => Ok(response),
    }
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, endpoint).await?;
    parse_json_response(validated_response).await
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    // Core request methods
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response>;

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize;

    // HTTP method implementations
    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    /// POST whose response body is ignored.
    async fn post_status<B>(&self, endpoint: &str, body: &B) -> ApiResult<()>
    where
        B: serde::Serialize;

    async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    async fn patch<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    /// DELETE whose response body is ignored.
    async fn delete_status(&self, endpoint: &str) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        let mut headers = ApiHeaders::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            root_url: root_url.into(),
            headers,
        }
    }

    pub fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    pub fn headers(&self) -> &ApiHeaders {
        &self.headers
    }

    /// A copy of this client that sends `token` as a bearer credential.
    pub fn authorized(&self, token: &AdminToken) -> Self {
        let mut client = self.clone();
        client.set_header("Authorization".to_string(), token.bearer());
        client
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response> {
        let url = self.url(endpoint);

        let request = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
            _ => {
                return Err(ApiError::UnexpectedStatusCode {
                    status: 405,
                    message: None,
                });
            }
        };

        request
            .headers(self.headers.clone().into())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize,
    {
        let url = self.url(endpoint);

        let request = match method {
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Put => gloo_net::http::Request::put(&url),
            HttpMethod::Patch => gloo_net::http::Request::patch(&url),
            _ => {
                return Err(ApiError::UnexpectedStatusCode {
                    status: 405,
                    message: None,
                });
            }
        };

        request
            .headers(self.headers.clone().into())
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        handle_json_response(response, endpoint).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_json_response(response, endpoint).await
    }

    async fn post_status<B>(&self, endpoint: &str, body: &B) -> ApiResult<()>
    where
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_response_status(response, endpoint).await.map(|_| ())
    }

    async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Put, endpoint, body)
            .await?;
        handle_json_response(response, endpoint).await
    }

    async fn patch<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Patch, endpoint, body)
            .await?;
        handle_json_response(response, endpoint).await
    }

    async fn delete_status(&self, endpoint: &str) -> ApiResult<()> {
        let response = self.make_request(HttpMethod::Delete, endpoint).await?;
        handle_response_status(response, endpoint).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_not_errors() {
        assert!(status_error(200, "/api/projects", None).is_none());
        assert!(status_error(204, "/api/projects/1", None).is_none());
    }

    #[test]
    fn server_errors_keep_status_and_message() {
        let error = status_error(500, "/api/contact/send", Some("x".into())).unwrap();
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.server_message(), Some("x"));
        assert_eq!(error.detail(), "x");
    }

    #[test]
    fn unauthorized_is_flagged() {
        let error = status_error(401, "/api/contact/all", None).unwrap();
        assert!(error.is_unauthorized());
        assert_eq!(error.detail(), "Unauthorized Access");
    }

    #[test]
    fn not_found_names_the_endpoint() {
        let error = status_error(404, "/api/admin/register", None).unwrap();
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.to_string(), "Not Found: /api/admin/register");
    }

    #[test]
    fn authorized_client_sends_bearer_header() {
        let client = HttpApiClient::new("https://backend.test");
        let authed = client.authorized(&AdminToken::new("abc"));

        assert_eq!(authed.headers().get("Authorization"), Some("Bearer abc"));
        assert_eq!(client.headers().get("Authorization"), None);
    }
}

//! Data structures exchanged with the portfolio backend.
//!
//! Field names follow the backend's JSON (`_id`, camelCase links and timestamps).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{MessageId, ProjectId};

/// A portfolio entry as returned by `GET /api/projects`.
///
/// Everything but the id may be missing on older records; one incomplete entry must not
/// reject the whole list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live_link: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Body of the create and update project requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_link: String,
    pub github_link: String,
    pub technologies: Vec<String>,
    pub featured: bool,
}

/// A visitor inquiry as listed on the admin dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: MessageId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attended: bool,
}

impl ContactMessage {
    /// Phone number, if the sender left a non-blank one.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|phone| !phone.trim().is_empty())
    }
}

/// Body of `POST /api/contact/send`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Body of `PATCH /api/contact/:id`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AttendedUpdate {
    pub attended: bool,
}

/// Body of the admin login and register requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

/// Error body some backend routes send, `{message}` or `{error}`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServerMessage {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ServerMessage {
    pub fn into_text(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_uses_backend_field_names() {
        let json = r#"{
            "_id": "p1",
            "title": "Site",
            "description": "A site",
            "image": "https://img/1.png",
            "liveLink": "https://live",
            "githubLink": "https://github.com/x/y",
            "technologies": ["Rust", "Yew"],
            "featured": true,
            "__v": 0
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id.as_str(), "p1");
        assert_eq!(project.live_link, "https://live");
        assert_eq!(project.technologies, vec!["Rust", "Yew"]);
        assert!(project.featured);
    }

    #[test]
    fn message_defaults_to_not_attended() {
        let json = r#"{
            "_id": "m1",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "",
            "subject": "Hello",
            "message": "Hi there",
            "createdAt": "2024-03-01T10:15:00.000Z"
        }"#;

        let message: ContactMessage = serde_json::from_str(json).unwrap();
        assert!(!message.attended);
        assert_eq!(message.phone(), None);
    }

    #[test]
    fn incomplete_project_does_not_reject_the_list() {
        let json = r#"[
            {"_id": "p1", "title": "Full", "description": "d", "image": "i", "liveLink": "l", "githubLink": "g", "technologies": ["Rust"], "featured": true},
            {"_id": "p2", "title": "Draft", "description": "No links yet", "technologies": ["Yew"]}
        ]"#;

        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].title, "Draft");
        assert_eq!(projects[1].github_link, "");
        assert_eq!(projects[1].image, "");
        assert!(!projects[1].featured);
    }

    #[test]
    fn message_without_timestamp_is_kept() {
        let json = r#"[
            {"_id": "m1", "name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello", "createdAt": "2024-03-01T10:15:00.000Z"},
            {"_id": "m2", "name": "Bob", "email": "bob@example.com", "subject": "Yo", "message": "Hey", "attended": true}
        ]"#;

        let messages: Vec<ContactMessage> = serde_json::from_str(json).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].created_at.is_some());
        assert_eq!(messages[1].created_at, None);
        assert!(messages[1].attended);
    }

    #[test]
    fn contact_payload_omits_missing_phone() {
        let payload = NewContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            subject: "Hello".into(),
            message: "Hi".into(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn server_message_prefers_message_over_error() {
        let body: ServerMessage =
            serde_json::from_str(r#"{"message":"x","error":"y"}"#).unwrap();
        assert_eq!(body.into_text().as_deref(), Some("x"));

        let body: ServerMessage = serde_json::from_str(r#"{"error":"y"}"#).unwrap();
        assert_eq!(body.into_text().as_deref(), Some("y"));
    }
}

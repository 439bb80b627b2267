//! Typed identifiers for backend records.
//!
//! The backend hands out opaque string ids. Wrapping them in [`Id`] with a marker type
//! keeps project ids and message ids from being passed where the other is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper around a backend-issued string id.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialized as the bare string the backend uses
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Wraps an id received from the backend.
    ///
    /// # Example
    /// ```
    /// use folio::id::ProjectId;
    ///
    /// let id = ProjectId::from_string("65f1c0ffee".to_string());
    /// assert_eq!(id.as_str(), "65f1c0ffee");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageMarker;

/// Id of a portfolio project.
pub type ProjectId = Id<ProjectMarker>;

/// Id of a contact message.
pub type MessageId = Id<MessageMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: ProjectId = "abc123".into();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(format!("{id:?}"), "Id(abc123)");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let original = MessageId::from_string("m-42".to_string());

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "\"m-42\"");

        let deserialized: MessageId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}

//! The admin session: a backend-issued bearer token held by the browser.
//!
//! Nothing here verifies the token. Its presence only decides whether the admin
//! views render; the backend decides whether requests made with it succeed.

/// Bearer token returned by `POST /api/admin/login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Blank tokens are treated as no session at all.
    pub fn parse(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

/// Where the admin token is persisted between page loads.
pub trait TokenStore {
    fn load(&self) -> Option<AdminToken>;
    fn save(&self, token: &AdminToken);
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct MemoryTokenStore {
        token: RefCell<Option<AdminToken>>,
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<AdminToken> {
            self.token.borrow().clone()
        }

        fn save(&self, token: &AdminToken) {
            self.token.replace(Some(token.clone()));
        }

        fn clear(&self) {
            self.token.replace(None);
        }
    }

    #[test]
    fn blank_token_is_no_session() {
        assert!(AdminToken::parse("").is_none());
        assert!(AdminToken::parse("   ").is_none());
        assert_eq!(AdminToken::parse("t0k").unwrap().as_str(), "t0k");
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::default();
        assert!(store.load().is_none());

        store.save(&AdminToken::new("abc"));
        assert_eq!(store.load(), Some(AdminToken::new("abc")));

        store.clear();
        assert!(store.load().is_none());
    }
}

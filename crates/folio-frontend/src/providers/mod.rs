//! Context providers for shared application state and services.

pub mod api;
pub mod session;
pub mod theme;

pub use session::{SessionProvider, use_session};
pub use theme::{ThemeProvider, use_theme};

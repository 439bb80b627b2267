//! Reusable UI components for the Folio frontend.
//!
//! Public portfolio sections (hero, project gallery, contact form), the site header,
//! and the building blocks of the admin dashboard.

pub mod admin;
pub mod contact;
pub mod header;
pub mod hero;
pub mod projects;

pub use contact::*;
pub use header::*;
pub use hero::*;
pub use projects::*;

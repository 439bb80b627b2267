//! Page components for different routes in the application.

pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_register;
pub mod home;
pub mod not_found;

pub use admin_dashboard::*;
pub use admin_login::*;
pub use admin_register::*;
pub use home::*;
pub use not_found::*;

//! Compile-time configuration for the portfolio application.

use std::time::Duration;

/// Backend used when `FOLIO_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "https://port-back-wyco.onrender.com";

/// The only address the admin forms will submit.
pub const ADMIN_EMAIL: &str = "timetomisin@gmail.com";

/// Local storage key holding the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

pub const CV_PATH: &str = "/resume/CV.pdf";
pub const CV_FILE_NAME: &str = "CV.pdf";

/// How long the contact form confirmation stays visible.
pub const CONTACT_SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Delay between a successful login and the redirect to the dashboard.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Number of characters shown in list previews on the dashboard.
pub const PREVIEW_CHARS: usize = 100;

/// Root URL of the portfolio backend, overridable with `FOLIO_API_URL` at build time.
pub fn api_base_url() -> &'static str {
    option_env!("FOLIO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Converts a UI delay into the millisecond count `gloo_timers` expects.
pub fn as_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

use folio::config;
use folio::service::HttpPortfolioService;

/// Create a new instance of the portfolio service against the configured backend.
pub fn create() -> HttpPortfolioService {
    HttpPortfolioService::new(config::api_base_url())
}

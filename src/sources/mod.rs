// Listing sources: remote job boards queried by keyword.

pub mod headhunter;
pub mod runner;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;

pub use headhunter::HeadHunter;

/// A remote listing service searched by keyword.
/// Returns raw provider items; mapping into vacancies happens downstream.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetch every item matching the keyword, page by page.
    async fn search(&self, keyword: &str) -> Result<Vec<Value>, AppError>;
}

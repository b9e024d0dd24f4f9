use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::sources::ListingSource;
use crate::store::VacancyStore;

/// Outcome of one fetch-and-store run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    pub new: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Search the source, normalize every item and add it to the store.
///
/// Returns all fetched vacancies, stored or not. The whole batch goes to
/// the store in one call; a store failure is logged and counted against
/// every fetched vacancy without aborting the run.
pub async fn collect(
    source: &dyn ListingSource,
    store: &dyn VacancyStore,
    keyword: &str,
) -> Result<(Vec<Vacancy>, RunSummary), AppError> {
    let raw = source.search(keyword).await?;
    let vacancies = Vacancy::from_provider_list(&raw);

    let mut summary = RunSummary {
        found: vacancies.len(),
        ..RunSummary::default()
    };

    match store.insert_all(&vacancies) {
        Ok(new) => {
            summary.new = new;
            summary.skipped = summary.found - new;
        }
        Err(e) => {
            tracing::warn!("Failed to store vacancies for '{keyword}': {e}");
            summary.failed = summary.found;
        }
    }

    tracing::info!(
        "{} run for '{keyword}' completed: {} found, {} new, {} already stored, {} failed",
        source.name(),
        summary.found,
        summary.new,
        summary.skipped,
        summary.failed
    );

    Ok((vacancies, summary))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

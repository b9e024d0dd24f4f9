pub mod json;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::pipeline::SalaryRange;

pub use json::JsonStore;

/// Selection applied by [`VacancyStore::query`]. Unset fields match all.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub title: Option<String>,
    pub salary_range: Option<SalaryRange>,
}

impl Criteria {
    /// Build criteria from user-supplied text. A malformed range is an error,
    /// an empty title matches everything.
    pub fn parse(title: Option<&str>, salary_range: Option<&str>) -> Result<Self, AppError> {
        Ok(Self {
            title: title.filter(|t| !t.is_empty()).map(String::from),
            salary_range: salary_range.map(str::parse::<SalaryRange>).transpose()?,
        })
    }

    pub fn matches(&self, vacancy: &Vacancy) -> bool {
        let title_ok = self
            .title
            .as_ref()
            .is_none_or(|t| vacancy.title().to_lowercase().contains(&t.to_lowercase()));
        let salary_ok = self
            .salary_range
            .is_none_or(|r| r.contains(vacancy.salary_value()));
        title_ok && salary_ok
    }
}

/// Persistence for vacancies, keyed by URL.
pub trait VacancyStore {
    /// Add a vacancy unless one with the same URL is already stored.
    /// Returns whether it was inserted.
    fn insert(&self, vacancy: &Vacancy) -> Result<bool, AppError>;

    /// Add every vacancy whose URL is not stored yet; within the batch the
    /// first occurrence wins. Returns how many were inserted.
    fn insert_all(&self, vacancies: &[Vacancy]) -> Result<usize, AppError> {
        let mut inserted = 0;
        for vacancy in vacancies {
            if self.insert(vacancy)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Stored vacancies matching the criteria, in storage order.
    fn query(&self, criteria: &Criteria) -> Result<Vec<Vacancy>, AppError>;

    /// Remove every vacancy sharing this one's URL. Returns how many were removed.
    fn delete(&self, vacancy: &Vacancy) -> Result<usize, AppError>;
}

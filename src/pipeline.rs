//! Ranking stages applied to fetched or stored vacancies.
//!
//! Every stage takes ownership of its input and returns a new sequence,
//! preserving the relative order of the records it keeps.

use std::str::FromStr;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;

/// Inclusive salary bounds parsed from `"<min>-<max>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

impl SalaryRange {
    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl FromStr for SalaryRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AppError::MalformedRange(s.to_string());

        let (min, max) = s.split_once('-').ok_or_else(malformed)?;
        let min = min.trim().parse().map_err(|_| malformed())?;
        let max = max.trim().parse().map_err(|_| malformed())?;
        Ok(SalaryRange { min, max })
    }
}

/// Keep vacancies whose title or description mentions any of the words.
/// No words keeps nothing.
pub fn filter_by_keywords<S: AsRef<str>>(vacancies: Vec<Vacancy>, words: &[S]) -> Vec<Vacancy> {
    let words: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();

    vacancies
        .into_iter()
        .filter(|v| {
            let title = v.title().to_lowercase();
            let description = v.description().to_lowercase();
            words
                .iter()
                .any(|w| title.contains(w.as_str()) || description.contains(w.as_str()))
        })
        .collect()
}

pub fn filter_by_salary_range(
    vacancies: Vec<Vacancy>,
    range: &str,
) -> Result<Vec<Vacancy>, AppError> {
    let range: SalaryRange = range.parse()?;
    Ok(filter_by_range(vacancies, range))
}

pub fn filter_by_range(vacancies: Vec<Vacancy>, range: SalaryRange) -> Vec<Vacancy> {
    vacancies
        .into_iter()
        .filter(|v| range.contains(v.salary_value()))
        .collect()
}

/// Highest salary first. Ties keep their input order.
pub fn sort_descending(mut vacancies: Vec<Vacancy>) -> Vec<Vacancy> {
    vacancies.sort_by(|a, b| b.cmp_by_salary(a));
    vacancies
}

pub fn take_top(mut vacancies: Vec<Vacancy>, n: usize) -> Vec<Vacancy> {
    vacancies.truncate(n);
    vacancies
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

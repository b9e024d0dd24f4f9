use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::store::{Criteria, VacancyStore};

/// On-disk layout: `{"items": [<vacancy>, ...]}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    items: Vec<Value>,
}

/// Vacancy store backed by a single pretty-printed JSON file.
///
/// Every operation reads the whole file and, when something changed,
/// rewrites it in full. A missing file is an empty store.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Vacancy>, AppError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Store {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::Store(e)),
        };

        let document: RawDocument = serde_json::from_str(&contents)?;
        let vacancies = document
            .items
            .into_iter()
            .map(Vacancy::from_storage_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vacancies)
    }

    fn save(&self, vacancies: &[Vacancy]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let items: Vec<Value> = vacancies.iter().map(Vacancy::to_storage_json).collect();
        let contents = serde_json::to_string_pretty(&json!({ "items": items }))?;
        fs::write(&self.path, contents)?;

        tracing::debug!(
            "Wrote {} vacancies to {}",
            vacancies.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl VacancyStore for JsonStore {
    fn insert(&self, vacancy: &Vacancy) -> Result<bool, AppError> {
        let mut vacancies = self.load()?;
        if vacancies.iter().any(|v| v.url() == vacancy.url()) {
            tracing::debug!("Skipping {}: already stored", vacancy.url());
            return Ok(false);
        }

        vacancies.push(vacancy.clone());
        self.save(&vacancies)?;
        Ok(true)
    }

    fn insert_all(&self, batch: &[Vacancy]) -> Result<usize, AppError> {
        let mut vacancies = self.load()?;
        let mut known: HashSet<String> =
            vacancies.iter().map(|v| v.url().to_string()).collect();

        let before = vacancies.len();
        for vacancy in batch {
            if known.insert(vacancy.url().to_string()) {
                vacancies.push(vacancy.clone());
            }
        }

        let inserted = vacancies.len() - before;
        if inserted > 0 {
            self.save(&vacancies)?;
        }
        tracing::debug!(
            "Batch of {}: {inserted} inserted, {} already stored",
            batch.len(),
            batch.len() - inserted
        );
        Ok(inserted)
    }

    fn query(&self, criteria: &Criteria) -> Result<Vec<Vacancy>, AppError> {
        let vacancies = self.load()?;
        Ok(vacancies
            .into_iter()
            .filter(|v| criteria.matches(v))
            .collect())
    }

    fn delete(&self, vacancy: &Vacancy) -> Result<usize, AppError> {
        let mut vacancies = self.load()?;
        let before = vacancies.len();
        vacancies.retain(|v| v.url() != vacancy.url());

        let removed = before - vacancies.len();
        if removed > 0 {
            self.save(&vacancies)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

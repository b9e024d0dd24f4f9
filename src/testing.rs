// In-memory doubles for the listing source and the store.

use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::sources::ListingSource;
use crate::store::{Criteria, VacancyStore};

/// Source that answers every search with the same items.
pub struct StaticSource {
    pub items: Vec<Value>,
    pub unreachable: bool,
}

impl StaticSource {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            unreachable: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            items: Vec::new(),
            unreachable: true,
        }
    }
}

#[async_trait]
impl ListingSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn search(&self, _keyword: &str) -> Result<Vec<Value>, AppError> {
        if self.unreachable {
            return Err(AppError::Connectivity("static source is offline".to_string()));
        }
        Ok(self.items.clone())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub items: Mutex<Vec<Vacancy>>,
    pub broken: bool,
}

impl MemoryStore {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Vacancy> {
        self.items.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.broken {
            return Err(AppError::Store(io::Error::other("disk on fire")));
        }
        Ok(())
    }
}

impl VacancyStore for MemoryStore {
    fn insert(&self, vacancy: &Vacancy) -> Result<bool, AppError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|v| v.url() == vacancy.url()) {
            return Ok(false);
        }
        items.push(vacancy.clone());
        Ok(true)
    }

    fn query(&self, criteria: &Criteria) -> Result<Vec<Vacancy>, AppError> {
        self.check()?;
        let items = self.items.lock().unwrap();
        Ok(items.iter().filter(|v| criteria.matches(v)).cloned().collect())
    }

    fn delete(&self, vacancy: &Vacancy) -> Result<usize, AppError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|v| v.url() != vacancy.url());
        Ok(before - items.len())
    }
}

/// The two postings used throughout the tests: a Python role paying
/// 100000-150000 RUR and a Java role paying a flat 150000 RUR.
pub fn python_and_java() -> Vec<Value> {
    vec![
        json!({
            "name": "Python Developer",
            "alternate_url": "https://hh.ru/vacancy/123456",
            "salary": {"from": 100000, "to": 150000, "currency": "RUR"},
            "snippet": {"requirement": "Опыт от 3 лет"}
        }),
        json!({
            "name": "Java Developer",
            "alternate_url": "https://hh.ru/vacancy/654321",
            "salary": {"from": 150000, "to": null, "currency": "RUR"},
            "snippet": {"requirement": "Опыт от 5 лет"}
        }),
    ]
}

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::salary;

pub const TITLE_NOT_SPECIFIED: &str = "title not specified";
pub const NO_DESCRIPTION: &str = "no description";

/// A normalized job posting.
///
/// Equality is structural. Ranking goes through [`Vacancy::salary_value`]
/// and [`Vacancy::cmp_by_salary`], never through `PartialEq`.
///
/// Fields are read-only once built, and `salary` is never empty: every
/// constructor, deserialization included, goes through the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredVacancy")]
pub struct Vacancy {
    title: String,
    url: String,
    salary: String,
    description: String,
}

/// Storage shape as read from disk, before salary canonicalization.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredVacancy {
    title: String,
    url: String,
    salary: String,
    description: String,
}

impl From<StoredVacancy> for Vacancy {
    fn from(stored: StoredVacancy) -> Self {
        Vacancy::new(
            stored.title,
            stored.url,
            &stored.salary,
            stored.description,
        )
    }
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        salary: &str,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            salary: salary::normalize_text(salary),
            description: description.into(),
        }
    }

    /// Build a vacancy from one item of the provider's search response.
    pub fn from_provider(raw: &Value) -> Self {
        let text = |v: Option<&Value>| {
            v.and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let title = text(raw.get("name"))
            .or_else(|| text(raw.get("title")))
            .unwrap_or_else(|| TITLE_NOT_SPECIFIED.to_string());

        let url = text(raw.get("alternate_url"))
            .or_else(|| text(raw.get("url")))
            .unwrap_or_default();

        let description = text(raw.get("snippet").and_then(|s| s.get("requirement")))
            .or_else(|| text(raw.get("description")))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Self {
            title,
            url,
            salary: salary::normalize(raw.get("salary")),
            description,
        }
    }

    /// Map a whole search response page (or batch of items) at once.
    pub fn from_provider_list(items: &[Value]) -> Vec<Vacancy> {
        items.iter().map(Self::from_provider).collect()
    }

    pub fn to_storage_json(&self) -> Value {
        json!({
            "title": self.title,
            "url": self.url,
            "salary": self.salary,
            "description": self.description,
        })
    }

    pub fn from_storage_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Rebuild the provider's item shape, recovering numeric salary bounds
    /// from the display string.
    pub fn to_provider_json(&self) -> Value {
        let bounds = salary::parse_display_to_bounds(&self.salary);
        let salary = if bounds.from.is_none() && bounds.to.is_none() {
            Value::Null
        } else {
            json!(bounds)
        };

        json!({
            "name": self.title,
            "alternate_url": self.url,
            "salary": salary,
            "snippet": { "requirement": self.description },
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Canonical salary display, never empty.
    pub fn salary(&self) -> &str {
        &self.salary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Salary used for ranking and range filtering. Recomputed on every call.
    pub fn salary_value(&self) -> u64 {
        salary::extract_value(&self.salary)
    }

    /// Ascending order by salary value.
    pub fn cmp_by_salary(&self, other: &Self) -> Ordering {
        self.salary_value().cmp(&other.salary_value())
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.title, self.salary, self.url)
    }
}

#[cfg(test)]
#[path = "vacancy_tests.rs"]
mod tests;

mod config;
mod error;
mod models;
mod pipeline;
mod prompt;
mod salary;
mod sources;
mod store;
#[cfg(test)]
mod testing;

use std::io::{self, Write};

use clap::Parser;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config};
use crate::models::vacancy::Vacancy;
use crate::sources::{HeadHunter, ListingSource, runner};
use crate::store::{Criteria, JsonStore, VacancyStore};

async fn search(
    source: &dyn ListingSource,
    store: &dyn VacancyStore,
    keyword: &str,
    top: usize,
    words: &[String],
    salary_range: Option<&str>,
) -> anyhow::Result<()> {
    let (vacancies, summary) = runner::collect(source, store, keyword).await?;
    let selected = prompt::select(vacancies, words, salary_range, top)?;

    let mut out = io::stdout().lock();
    writeln!(out, "Fetched {} vacancies, {} new saved.", summary.found, summary.new)?;
    prompt::print_vacancies(&mut out, &selected)?;
    Ok(())
}

fn delete(store: &dyn VacancyStore, url: &str) -> anyhow::Result<()> {
    let stored = store.query(&Criteria::default())?;
    let mut out = io::stdout().lock();

    match stored.iter().find(|v| v.url() == url) {
        Some(vacancy) => {
            let removed = store.delete(vacancy)?;
            writeln!(out, "Removed {} ({removed} entries).", vacancy.title())?;
        }
        None => writeln!(out, "No vacancy with URL {url} was found.")?,
    }
    Ok(())
}

fn export(store: &dyn VacancyStore) -> anyhow::Result<()> {
    let items: Vec<Value> = store
        .query(&Criteria::default())?
        .iter()
        .map(Vacancy::to_provider_json)
        .collect();

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &json!({ "items": items }))?;
    writeln!(out)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vacancies=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    let store = JsonStore::new(&config.store_path);
    tracing::debug!("Using store {}", store.path().display());

    match config.resolved_command() {
        Command::Interactive => {
            let source = HeadHunter::new(config.source_options())?;
            let mut input = io::stdin().lock();
            let mut out = io::stdout();
            prompt::run(&source, &store, &mut input, &mut out).await?;
        }
        Command::Search {
            keyword,
            top,
            words,
            salary_range,
        } => {
            let source = HeadHunter::new(config.source_options())?;
            search(&source, &store, &keyword, top, &words, salary_range.as_deref()).await?;
        }
        Command::List {
            title,
            salary_range,
        } => {
            let criteria = Criteria::parse(title.as_deref(), salary_range.as_deref())?;
            let found = store.query(&criteria)?;
            prompt::print_vacancies(&mut io::stdout().lock(), &found)?;
        }
        Command::Delete { url } => delete(&store, &url)?,
        Command::Export => export(&store)?,
    }

    Ok(())
}

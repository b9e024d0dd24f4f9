use std::io::{BufRead, Write};

use anyhow::Context;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;
use crate::pipeline::{filter_by_keywords, filter_by_salary_range, sort_descending, take_top};
use crate::sources::ListingSource;
use crate::sources::runner;
use crate::store::VacancyStore;

/// Narrow fetched vacancies down to the ones worth showing.
///
/// No words skips the keyword stage and a blank range skips the salary
/// stage. A malformed range is an error.
pub fn select(
    vacancies: Vec<Vacancy>,
    words: &[String],
    salary_range: Option<&str>,
    top: usize,
) -> Result<Vec<Vacancy>, AppError> {
    let vacancies = if words.is_empty() {
        vacancies
    } else {
        filter_by_keywords(vacancies, words)
    };

    let vacancies = match salary_range.map(str::trim) {
        Some(range) if !range.is_empty() => filter_by_salary_range(vacancies, range)?,
        _ => vacancies,
    };

    Ok(take_top(sort_descending(vacancies), top))
}

/// One line per vacancy: `<title>: <salary> (<url>)`.
pub fn print_vacancies<W: Write>(out: &mut W, vacancies: &[Vacancy]) -> std::io::Result<()> {
    if vacancies.is_empty() {
        writeln!(out, "No vacancies matched.")?;
    }
    for vacancy in vacancies {
        writeln!(out, "{vacancy}")?;
    }
    Ok(())
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read answer")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive session: search, save, rank, print, optionally delete.
/// Ends quietly when input runs out.
pub async fn run<R: BufRead, W: Write>(
    source: &dyn ListingSource,
    store: &dyn VacancyStore,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(keyword) = ask(input, out, "Search query: ")? else {
        return Ok(());
    };

    let (vacancies, summary) = runner::collect(source, store, &keyword).await?;
    writeln!(
        out,
        "Fetched {} vacancies, {} new saved to the store.",
        summary.found, summary.new
    )?;
    if summary.failed > 0 {
        writeln!(out, "{} vacancies could not be saved.", summary.failed)?;
    }

    let Some(top) = ask(input, out, "How many top vacancies to show: ")? else {
        return Ok(());
    };
    // Anything that is not a non-negative count shows nothing.
    let top = top.parse::<usize>().unwrap_or(0);

    let Some(words) = ask(input, out, "Keywords to filter by: ")? else {
        return Ok(());
    };
    let words: Vec<String> = words.split_whitespace().map(String::from).collect();

    let Some(range) = ask(input, out, "Salary range (e.g. 100000-150000): ")? else {
        return Ok(());
    };

    let selected = select(vacancies.clone(), &words, Some(range.as_str()), top)?;
    print_vacancies(out, &selected)?;

    let Some(url) = ask(
        input,
        out,
        "URL of a vacancy to delete (leave empty to skip): ",
    )?
    else {
        return Ok(());
    };
    if url.is_empty() {
        return Ok(());
    }

    match vacancies.iter().find(|v| v.url() == url) {
        Some(vacancy) => {
            store.delete(vacancy)?;
            writeln!(out, "Removed {}.", vacancy.title())?;
        }
        None => writeln!(out, "No vacancy with URL {url} was found.")?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::sources::headhunter::{
    DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, HeadHunterOptions,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "vacancies", about = "Fetch, store and rank hh.ru vacancies")]
pub struct Config {
    /// JSON file holding saved vacancies
    #[arg(long, env = "VACANCIES_STORE", default_value = "data/vacancies.json")]
    pub store_path: PathBuf,

    /// Base URL of the listing API
    #[arg(long, env = "VACANCIES_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// User-Agent header sent with every request
    #[arg(long, env = "VACANCIES_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Vacancies requested per page
    #[arg(long, env = "VACANCIES_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Maximum number of pages fetched per search
    #[arg(long, env = "VACANCIES_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, env = "VACANCIES_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Answer prompts for a search, filters and an optional deletion (default)
    Interactive,
    /// Search once, save the results and print the best matches
    Search {
        /// Search keyword sent to the listing API
        keyword: String,

        /// How many vacancies to print
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Keep only vacancies mentioning any of these words
        #[arg(long, num_args = 1..)]
        words: Vec<String>,

        /// Salary range as <min>-<max>
        #[arg(long)]
        salary_range: Option<String>,
    },
    /// Print saved vacancies in storage order
    List {
        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,

        /// Salary range as <min>-<max>
        #[arg(long)]
        salary_range: Option<String>,
    },
    /// Remove saved vacancies with this URL
    Delete { url: String },
    /// Dump saved vacancies in the listing API's item format
    Export,
}

impl Config {
    /// Resolve the command, defaulting to Interactive if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }

    pub fn source_options(&self) -> HeadHunterOptions {
        HeadHunterOptions {
            base_url: self.api_url.clone(),
            user_agent: self.user_agent.clone(),
            per_page: self.per_page,
            max_pages: self.max_pages,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

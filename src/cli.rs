//! Command-line surface of the `feedback` binary.

use clap::{Args, Parser, Subcommand};
use portal::{Category, ListQuery, PageLimit, ReviewFilter, SortOrder};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, Timeouts};

#[derive(Parser, Debug)]
#[command(name = "feedback", about = "Employee feedback portal client")]
pub struct Cli {
    #[arg(long, env = "FEEDBACK_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "FEEDBACK_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, env = "FEEDBACK_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    #[must_use]
    pub fn timeouts(&self) -> Timeouts {
        Timeouts { request_secs: self.timeout_secs, connect_secs: self.connect_timeout_secs }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the service root answers.
    Ping,
    /// Submit anonymous feedback.
    Submit {
        #[arg(long)]
        category: Category,
        text: String,
    },
    /// List feedback with filters.
    List(ListArgs),
    Get {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Mark feedback as reviewed.
    Review {
        id: String,
        #[arg(long)]
        json: bool,
    },
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Line-driven portal with both views.
    Interactive,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long, default_value = "any", help = "any, true, or false")]
    pub reviewed: ReviewFilter,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    #[arg(long, default_value = "10", help = "5, 10, 20, or 50")]
    pub limit: PageLimit,

    #[arg(long, allow_hyphen_values = true, help = "e.g. -submissionTime, category, -isReviewed")]
    pub sort: Option<SortOrder>,

    /// Filter the fetched page by text (not sent to the server).
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery { category: self.category, reviewed: self.reviewed, page: self.page, limit: self.limit, sort: self.sort }
    }
}

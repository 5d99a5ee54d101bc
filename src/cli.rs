use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use newcomer_guide::constants::{APP_DESCRIPTION, APP_NAME, APP_VERSION};
use newcomer_guide::criteria::parse_level;
use newcomer_guide::preferences::parse_language;

use super::prelude::*;

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version = APP_VERSION, about = APP_DESCRIPTION)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "NEWCOMER_GUIDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Display language for this run only (en or de)
    #[arg(long, global = true, value_parser = parse_language)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog entries matching the given filters
    List(ListArgs),
    /// Show a single entry
    Show {
        /// Entry id, e.g. german-a1
        id: String,
    },
    /// List the locations that can be filtered on
    Locations,
    /// List the levels that can be filtered on
    Levels,
    /// Show or change the saved display language
    Language {
        /// New language (en or de); prints the current one when omitted
        #[arg(value_parser = parse_language)]
        language: Option<Language>,
    },
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Free-text search over title, description and tags
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category tab: all, courses, resources or exams
    #[arg(short, long, default_value = "all", value_parser = Tab::parse)]
    pub tab: Tab,

    /// Only entries at this level (repeatable)
    #[arg(short, long = "level", value_parser = parse_level)]
    pub levels: Vec<Level>,

    /// Only entries at this location (repeatable)
    #[arg(short = 'L', long = "location")]
    pub locations: Vec<String>,

    /// Only online entries
    #[arg(long)]
    pub online: bool,

    /// Only free entries
    #[arg(long)]
    pub free: bool,
}

impl ListArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search.clone(),
            tab: self.tab,
            levels: self.levels.iter().copied().collect(),
            locations: self.locations.iter().cloned().collect(),
            online_only: self.online,
            free_only: self.free,
        }
    }
}

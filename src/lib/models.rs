use std::path::PathBuf;

use clap::{command, Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub mod changes_model;
pub mod schedule_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the content root, the changes page address and the scraper selectors.
/// 2. Whether the output should be indented.
/// 3. What should be fetched.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long)]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List branch folders of the packaged assets
    Branches,
    /// List sub-folders of one branch
    SubFolders { branch: String },
    /// List groups stored in one sub-folder
    Groups { branch: String, sub_folder: String },
    /// Baseline schedule of a group for one day (0 is Monday)
    Day { group: String, day_index: usize },
    /// Baseline schedule of a group for the whole week
    Week { group: String },
    /// Published changes of a group for one day (0 is Monday)
    Changes { group: String, day_index: usize },
    /// Published changes of a group for the whole week
    WeekChanges { group: String },
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Content root of the application; packaged assets live next to it, under its parent
/// 2. Address of the page where the changes are published
/// 3. Ceiling in seconds for downloading and for reading one changes document
/// 4. User agent sent to the changes site
/// 5. CSS selectors used to scrape the changes page
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub content_root: PathBuf,
    pub site_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub selectors: SiteSelectors,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteSelectors {
    pub month: String,
    pub title: String,
    pub entry: String,
    pub link: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            month: ".changes-month".to_owned(),
            title: "h1, h2, h3".to_owned(),
            entry: "li".to_owned(),
            link: "a[href]".to_owned(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("schedule-api/{}", env!("CARGO_PKG_VERSION"))
}

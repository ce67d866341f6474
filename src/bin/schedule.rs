use lib::asset_getter::AssetGetter;
use lib::changes_getter::ChangesGetter;
use lib::document::{HttpDocumentFetcher, TextChangesReader};
use lib::formatter::to_json;
use lib::models::{Args, Command, Config};
use lib::reporter::LogReporter;
use lib::site_index::SiteParser;

use std::{error::Error, time::Duration};

use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::info;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    /* Setup logging, stdout is for the output */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("SCHEDULE_"))
        .extract()?;
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );

    let assets = AssetGetter::new(&config.content_root, LogReporter);

    let output = match &args.command {
        Command::Branches => to_json(&assets.list_branches()?, args.pretty)?,
        Command::SubFolders { branch } => to_json(&assets.list_sub_folders(branch), args.pretty)?,
        Command::Groups { branch, sub_folder } => {
            to_json(&assets.list_group_names(branch, sub_folder), args.pretty)?
        }
        Command::Day { group, day_index } => {
            to_json(&assets.get_day_schedule(*day_index, group), args.pretty)?
        }
        Command::Week { group } => to_json(&assets.get_week_schedule(group), args.pretty)?,
        Command::Changes { group, day_index } => {
            let changes = changes_getter(&config)?;
            to_json(&changes.get_day_changes(*day_index, group).await, args.pretty)?
        }
        Command::WeekChanges { group } => {
            let changes = changes_getter(&config)?;
            to_json(&changes.get_week_changes(group).await, args.pretty)?
        }
    };
    println!("{output}");

    Ok(())
}

fn changes_getter(
    config: &Config,
) -> Result<ChangesGetter<SiteParser, HttpDocumentFetcher, TextChangesReader, LogReporter>, Box<dyn Error>>
{
    let http_client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    let page_url = Url::parse(&config.site_url)?;

    Ok(ChangesGetter::new(
        SiteParser::new(http_client.clone(), config.site_url.clone(), config.selectors.clone()),
        HttpDocumentFetcher::new(http_client, page_url),
        TextChangesReader,
        LogReporter,
    )
    .with_timeout(Duration::from_secs(config.timeout_secs)))
}

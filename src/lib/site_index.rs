//! The page where changes are published: period nodes (usually months), each with
//! dated entries, some of them linking to a changes document.
use std::sync::LazyLock;

use chrono::NaiveDate;
use log::{debug, info};
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::{
    days::find_day_token,
    error::ChangesError,
    models::{
        changes_model::{ChangeElement, MonthChanges},
        SiteSelectors,
    },
};

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\.(\d{1,2})\.(\d{4})").expect("date pattern is valid")
});

/// A trait, necessary for every entity that lists the published changes.
/// Called anew for every request, nothing is cached.
#[allow(async_fn_in_trait)]
pub trait SiteIndex {
    async fn parse_available_nodes(&self) -> Result<Vec<MonthChanges>, ChangesError>;
}

impl<T: SiteIndex + ?Sized> SiteIndex for &T {
    async fn parse_available_nodes(&self) -> Result<Vec<MonthChanges>, ChangesError> {
        (**self).parse_available_nodes().await
    }
}

/// Scrapes the changes page with CSS selectors.
pub struct SiteParser {
    client: Client,
    page_url: String,
    selectors: SiteSelectors,
}

impl SiteParser {
    pub fn new(client: Client, page_url: impl Into<String>, selectors: SiteSelectors) -> Self {
        Self {
            client,
            page_url: page_url.into(),
            selectors,
        }
    }
}

impl SiteIndex for SiteParser {
    async fn parse_available_nodes(&self) -> Result<Vec<MonthChanges>, ChangesError> {
        info!("Getting changes page from {}", self.page_url);
        let page = self
            .client
            .get(&self.page_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|error| ChangesError::Scrape(error.to_string()))?
            .text()
            .await
            .map_err(|error| ChangesError::Scrape(error.to_string()))?;
        parse_changes_page(&page, &self.selectors)
    }
}

fn selector(css: &str) -> Result<Selector, ChangesError> {
    Selector::parse(css)
        .map_err(|error| ChangesError::Scrape(format!("invalid selector '{css}': {error}")))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

/// Date written as `dd.mm.yyyy` somewhere in `text`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let captures = DATE_REGEX.captures(text)?;
    NaiveDate::from_ymd_opt(
        captures[3].parse().ok()?,
        captures[2].parse().ok()?,
        captures[1].parse().ok()?,
    )
}

/// Entries without a recognizable date or day are skipped. A page without any period node is an error.
pub fn parse_changes_page(
    page: &str,
    selectors: &SiteSelectors,
) -> Result<Vec<MonthChanges>, ChangesError> {
    let month_selector = selector(&selectors.month)?;
    let title_selector = selector(&selectors.title)?;
    let entry_selector = selector(&selectors.entry)?;
    let link_selector = selector(&selectors.link)?;

    let document = Html::parse_document(page);
    let mut months = Vec::new();
    for month in document.select(&month_selector) {
        let name = month
            .select(&title_selector)
            .next()
            .map(|title| element_text(title).trim().to_owned())
            .unwrap_or_default();

        let mut elements = Vec::new();
        for entry in month.select(&entry_selector) {
            let text = element_text(entry);
            let (Some(date), Some(day)) = (parse_date(&text), find_day_token(&text)) else {
                debug!("Skipping entry without date or day: {}", text.trim());
                continue;
            };
            let link = entry
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"))
                .map(str::to_owned);
            elements.push(ChangeElement::new(date, day, link));
        }
        months.push(MonthChanges { name, elements });
    }

    if months.is_empty() {
        return Err(ChangesError::Scrape(format!(
            "no nodes match '{}'",
            selectors.month
        )));
    }
    debug!("Found {} period nodes", months.len());
    Ok(months)
}

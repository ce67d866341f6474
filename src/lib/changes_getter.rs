//! Published changes of one group: find the entry for the day on the changes page,
//! download its document, read the group's rows, remove the download.
use std::time::Duration;

use chrono::{Local, NaiveDate};
use futures::future;
use log::{debug, info, warn};
use tokio::time::timeout;

use crate::{
    change_locator::find_element_by_day_without_previous_weeks,
    days::{day_by_index, DAYS_IN_WEEK},
    document::{DocumentFetcher, DocumentReader},
    error::ChangesError,
    models::changes_model::{ChangeElement, ChangeEntry, ChangesOfDay},
    reporter::{ErrorReporter, Severity},
    site_index::SiteIndex,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ChangesGetter<S, F, D, R> {
    site_index: S,
    fetcher: F,
    reader: D,
    reporter: R,
    timeout: Duration,
    today: Option<NaiveDate>,
}

impl<S, F, D, R> ChangesGetter<S, F, D, R>
where
    S: SiteIndex,
    F: DocumentFetcher,
    D: DocumentReader,
    R: ErrorReporter,
{
    pub fn new(site_index: S, fetcher: F, reader: D, reporter: R) -> Self {
        Self {
            site_index,
            fetcher,
            reader,
            reporter,
            timeout: DEFAULT_TIMEOUT,
            today: None,
        }
    }

    /// Ceiling for the page scan, the download and the reading, each applied separately.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pins the date used to skip previous weeks, the local date is used otherwise.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Changes of `group_name` for the day with `day_index`, 0 being Monday.
    /// Never fails: every problem is reported once and yields changes that were not found.
    pub async fn get_day_changes(&self, day_index: usize, group_name: &str) -> ChangesOfDay {
        let today = self.today();
        let Some(day_name) = day_by_index(day_index) else {
            self.reporter.report(
                Severity::LookupMiss,
                &format!("No such day while getting changes: day — {day_index}, current date — {today}."),
            );
            return ChangesOfDay::not_found();
        };

        let element = match self.locate(day_name, today).await {
            Ok(Some(element)) => element,
            Ok(None) => {
                self.reporter.report(
                    Severity::LookupMiss,
                    &format!(
                        "Changes for the requested day were not found: day — {day_index}, current date — {today}."
                    ),
                );
                return ChangesOfDay::not_found();
            }
            Err(error) => {
                self.reporter.report(
                    Severity::ParseFailure,
                    &format!("Page parse error while getting changes: {error}."),
                );
                return ChangesOfDay::not_found();
            }
        };
        debug!("Located changes entry:{}", element.describe("    "));

        let link = match element.link_to_document.as_deref() {
            Some(link) if element.has_changes() => link,
            _ => {
                self.reporter.report(
                    Severity::LookupMiss,
                    &format!(
                        "No changes document is published for {}: day — {day_index}, current date — {today}.",
                        element.date
                    ),
                );
                return ChangesOfDay::not_found();
            }
        };

        match self.fetch_and_read(link, day_name, group_name).await {
            Ok(entries) => {
                info!(
                    "Found {} change(s) for {} on {}",
                    entries.len(),
                    group_name,
                    element.date
                );
                ChangesOfDay::found(element.date, entries)
            }
            Err(error @ ChangesError::WrongDay { .. }) => {
                self.reporter.report(Severity::ResourceAbsent, &error.to_string());
                ChangesOfDay::not_found()
            }
            Err(error) => {
                self.reporter.report(
                    Severity::ResourceAbsent,
                    &format!("Changes document for {} is unavailable: {error}.", element.date),
                );
                ChangesOfDay::not_found()
            }
        }
    }

    /// Changes for every day of the week, Monday first. Days are requested concurrently
    /// and one failing day does not affect the others.
    pub async fn get_week_changes(&self, group_name: &str) -> Vec<ChangesOfDay> {
        future::join_all(
            (0..DAYS_IN_WEEK).map(|day_index| self.get_day_changes(day_index, group_name)),
        )
        .await
    }

    async fn locate(
        &self,
        day_name: &str,
        today: NaiveDate,
    ) -> Result<Option<ChangeElement>, ChangesError> {
        let months = timeout(self.timeout, self.site_index.parse_available_nodes())
            .await
            .map_err(|_| ChangesError::Timeout("changes page scan"))??;
        Ok(find_element_by_day_without_previous_weeks(&months, day_name, today).cloned())
    }

    /* the downloaded file is removed here on every path, or by its drop if this future is dropped */
    async fn fetch_and_read(
        &self,
        link: &str,
        day_name: &str,
        group_name: &str,
    ) -> Result<Vec<ChangeEntry>, ChangesError> {
        let document = timeout(self.timeout, self.fetcher.download(link))
            .await
            .map_err(|_| ChangesError::Timeout("document download"))??;

        let read = timeout(
            self.timeout,
            self.reader.read_changes(&document, day_name, group_name),
        )
        .await
        .map_err(|_| ChangesError::Timeout("document reading"));

        if let Err(error) = document.close() {
            warn!("Downloaded changes document could not be removed: {error}");
        }
        read?
    }
}

//! Changes documents: downloading them to a transient file and reading the changes of one group out of them.
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};
use reqwest::Client;
use tempfile::TempPath;
use url::Url;

use crate::{
    days::find_day_in_text,
    error::ChangesError,
    models::changes_model::ChangeEntry,
};

/// A trait, necessary for every entity that downloads changes documents.
/// The returned path removes the file when dropped.
#[allow(async_fn_in_trait)]
pub trait DocumentFetcher {
    async fn download(&self, link: &str) -> Result<TempPath, ChangesError>;
}

/// A trait, necessary for every entity that reads changes documents.
/// Must fail with [`ChangesError::WrongDay`] when the document is about another day.
#[allow(async_fn_in_trait)]
pub trait DocumentReader {
    async fn read_changes(
        &self,
        path: &Path,
        day_name: &str,
        group_name: &str,
    ) -> Result<Vec<ChangeEntry>, ChangesError>;
}

impl<T: DocumentFetcher + ?Sized> DocumentFetcher for &T {
    async fn download(&self, link: &str) -> Result<TempPath, ChangesError> {
        (**self).download(link).await
    }
}

impl<T: DocumentReader + ?Sized> DocumentReader for &T {
    async fn read_changes(
        &self,
        path: &Path,
        day_name: &str,
        group_name: &str,
    ) -> Result<Vec<ChangeEntry>, ChangesError> {
        (**self).read_changes(path, day_name, group_name).await
    }
}

/// Turns a link from the changes page into something downloadable:
/// relative links are joined with the page address, Google Docs documents are exported as plain text,
/// Google Drive files are downloaded directly.
pub fn resolve_document_link(page_url: &Url, link: &str) -> Result<Url, url::ParseError> {
    let url = page_url.join(link.trim())?;
    let segments: Vec<&str> = url.path_segments().map(Iterator::collect).unwrap_or_default();

    match (url.host_str(), segments.as_slice()) {
        (Some("docs.google.com"), ["document", "d", id, ..]) => Url::parse(&format!(
            "https://docs.google.com/document/d/{id}/export?format=txt"
        )),
        (Some("drive.google.com"), ["file", "d", id, ..]) => Url::parse(&format!(
            "https://drive.google.com/uc?export=download&id={id}"
        )),
        _ => Ok(url),
    }
}

pub struct HttpDocumentFetcher {
    client: Client,
    page_url: Url,
    download_dir: PathBuf,
}

impl HttpDocumentFetcher {
    pub fn new(client: Client, page_url: Url) -> Self {
        Self::with_download_dir(client, page_url, std::env::temp_dir())
    }

    pub fn with_download_dir(client: Client, page_url: Url, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            page_url,
            download_dir: download_dir.into(),
        }
    }
}

impl DocumentFetcher for HttpDocumentFetcher {
    async fn download(&self, link: &str) -> Result<TempPath, ChangesError> {
        let url = resolve_document_link(&self.page_url, link)?;
        info!("Getting changes document from {}", url);
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let mut file = tempfile::Builder::new()
            .prefix("changes-")
            .suffix(".txt")
            .tempfile_in(&self.download_dir)
            .map_err(|error| ChangesError::Fetch(error.to_string()))?;
        file.write_all(&bytes)
            .and_then(|()| file.flush())
            .map_err(|error| ChangesError::Fetch(error.to_string()))?;
        debug!("Saved {} bytes to {}", bytes.len(), file.path().display());
        Ok(file.into_temp_path())
    }
}

/// Reads documents exported as plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextChangesReader;

impl DocumentReader for TextChangesReader {
    async fn read_changes(
        &self,
        path: &Path,
        day_name: &str,
        group_name: &str,
    ) -> Result<Vec<ChangeEntry>, ChangesError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| ChangesError::Read(format!("{}: {}", path.display(), error)))?;
        parse_changes_text(&text, day_name, group_name)
    }
}

fn is_table_row(line: &str) -> bool {
    line.contains(['|', '\t'])
}

/// The first line outside the table that names a day is the day marker, it must name `day_name`.
/// Rows are cells separated by `|` or tabs: group, optional lesson number, then the change itself.
pub fn parse_changes_text(
    text: &str,
    day_name: &str,
    group_name: &str,
) -> Result<Vec<ChangeEntry>, ChangesError> {
    let marker = text
        .lines()
        .filter(|line| !is_table_row(line))
        .find_map(find_day_in_text)
        .ok_or_else(|| ChangesError::Read("document names no day".to_owned()))?;
    if marker != day_name {
        return Err(ChangesError::WrongDay {
            expected: day_name.to_owned(),
            found: marker.to_owned(),
        });
    }

    let group_name = group_name.trim().to_uppercase();
    let entries = text
        .lines()
        .map(|line| {
            line.split(['|', '\t'])
                .map(str::trim)
                .collect::<Vec<_>>()
        })
        .filter(|cells| cells.len() > 1 && cells[0].to_uppercase() == group_name)
        .map(|cells| {
            let lesson_number = cells[1].parse::<u8>().ok();
            let skip = if lesson_number.is_some() { 2 } else { 1 };
            ChangeEntry {
                lesson_number,
                description: cells[skip..]
                    .iter()
                    .filter(|cell| !cell.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" | "),
            }
        })
        .collect();

    Ok(entries)
}

//! Baseline schedules packaged with the application:
//! `<project root>/Assets/<branch>/<sub-folder>/<GROUP>.json`.
use std::{
    error::Error,
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    days::{translate_day, DAYS_IN_WEEK},
    group_name::{project_root, resolve_asset_values},
    models::schedule_model::{DaySchedule, WeekSchedule},
    reporter::{ErrorReporter, Severity},
};

pub const ASSETS_FOLDER: &str = "Assets";

pub struct AssetGetter<R: ErrorReporter> {
    content_root: PathBuf,
    reporter: R,
}

impl<R: ErrorReporter> AssetGetter<R> {
    pub fn new(content_root: impl Into<PathBuf>, reporter: R) -> Self {
        Self {
            content_root: content_root.into(),
            reporter,
        }
    }

    fn assets_root(&self) -> Result<PathBuf, Box<dyn Error>> {
        Ok(project_root(&self.content_root)?.join(ASSETS_FOLDER))
    }

    /// Branch folders of the assets. A missing assets folder is a broken installation and is returned as an error.
    pub fn list_branches(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(list_entries(&self.assets_root()?, EntryKind::Folder)?)
    }

    pub fn list_sub_folders(&self, branch: &str) -> Vec<String> {
        self.list_or_report(&[branch], EntryKind::Folder)
    }

    pub fn list_group_names(&self, branch: &str, sub_folder: &str) -> Vec<String> {
        self.list_or_report(&[branch, sub_folder], EntryKind::File)
    }

    fn list_or_report(&self, segments: &[&str], kind: EntryKind) -> Vec<String> {
        let listed = self.assets_root().and_then(|root| {
            let path = segments.iter().fold(root, |path, segment| path.join(segment));
            Ok(list_entries(&path, kind)?)
        });

        listed.unwrap_or_else(|error| {
            self.reporter.report(
                Severity::ResourceAbsent,
                &format!(
                    "Attempt to access a folder that does not exist: {} ({})",
                    segments.join("/"),
                    error
                ),
            );
            Vec::new()
        })
    }

    /// Schedule of `group_name` for the day with `day_index`, 0 being Monday.
    /// Any problem is reported and replaced with an empty schedule for that day.
    pub fn get_day_schedule(&self, day_index: usize, group_name: &str) -> DaySchedule {
        let group_name = group_name.to_uppercase();
        let values = resolve_asset_values(&self.content_root, &group_name);
        let path = values
            .project_root
            .join(ASSETS_FOLDER)
            .join(&values.branch)
            .join(&values.sub_folder)
            .join(format!("{group_name}.json"));

        if values.is_empty() || !path.is_file() {
            self.reporter.report(
                Severity::DataMissing,
                &format!(
                    "Schedule file not found: branch — {}, sub-folder — {}, group — {}.",
                    values.branch, values.sub_folder, group_name
                ),
            );
            return DaySchedule::fallback(day_index);
        }

        let week = match read_week_schedule(&path) {
            Ok(Some(week)) => week,
            Ok(None) => {
                self.reporter.report(
                    Severity::DataMissing,
                    &format!("Schedule file of group {group_name} holds no schedule."),
                );
                return DaySchedule::fallback(day_index);
            }
            Err(error) => {
                self.reporter.report(
                    Severity::DataMissing,
                    &format!("Schedule file of group {group_name} could not be read: {error}."),
                );
                return DaySchedule::fallback(day_index);
            }
        };

        match week.days.into_iter().nth(day_index) {
            Some(day) => day,
            None => {
                self.reporter.report(
                    Severity::DataMissing,
                    &format!(
                        "Error while getting data (day): group — {}, day — {}.",
                        week.group_name, day_index
                    ),
                );
                DaySchedule::fallback(day_index)
            }
        }
    }

    /// Seven independent day lookups, Monday first.
    pub fn get_week_schedule(&self, group_name: &str) -> WeekSchedule {
        let group_name = group_name.to_uppercase();
        let days = (0..DAYS_IN_WEEK)
            .map(|day_index| self.get_day_schedule(day_index, &group_name))
            .collect();
        WeekSchedule::new(group_name, days)
    }
}

/// Reads a week schedule and translates its day names. A `null` file yields `None`.
pub fn read_week_schedule(path: &Path) -> Result<Option<WeekSchedule>, Box<dyn Error>> {
    debug!("Reading schedule from {}", path.display());
    let file = BufReader::new(File::open(path)?);
    let week: Option<WeekSchedule> = serde_json::from_reader(file)?;
    Ok(week.map(|mut week| {
        for day in week.days.iter_mut() {
            day.day = translate_day(&day.day);
        }
        week
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Folder,
    File,
}

/* base names of folders, or file names without extension, sorted */
fn list_entries(path: &Path, kind: EntryKind) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        let name = match kind {
            EntryKind::Folder if entry_path.is_dir() => entry_path.file_name(),
            EntryKind::File if entry_path.is_file() => entry_path.file_stem(),
            _ => None,
        };
        if let Some(name) = name {
            names.push(name.to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
#[path = "tests/asset_getter_tests.rs"]
mod tests;

//! Group names follow `<year><letters>[-<number>]`, e.g. `19П-3` or `20ВЕБ-1`.
//! The letters name the sub-folder of the assets, their first letter names the branch.
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Where the assets of one group live.
/// Consists of:
/// 1. Project root, the parent of the application content root
/// 2. Branch folder
/// 3. Sub-folder inside the branch
///
/// All three are empty when the group name can not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetValues {
    pub project_root: PathBuf,
    pub branch: String,
    pub sub_folder: String,
}

impl AssetValues {
    pub fn is_empty(&self) -> bool {
        self.project_root.as_os_str().is_empty() && self.branch.is_empty() && self.sub_folder.is_empty()
    }
}

pub fn sub_folder_from_name(group_name: &str) -> Result<String, ResolveError> {
    let malformed = || ResolveError::MalformedGroup(group_name.to_owned());
    let group_name = group_name.trim().to_uppercase();

    let rest = group_name.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == group_name.len() {
        return Err(malformed());
    }
    let letters: String = rest.chars().take_while(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return Err(malformed());
    }

    let tail = &rest[letters.len()..];
    let number = tail.strip_prefix('-').unwrap_or(tail);
    if !number.chars().all(|c| c.is_ascii_digit()) || (tail.starts_with('-') && number.is_empty()) {
        return Err(malformed());
    }

    Ok(letters)
}

pub fn prefix_from_name(group_name: &str) -> Result<String, ResolveError> {
    let sub_folder = sub_folder_from_name(group_name)?;
    Ok(sub_folder.chars().take(1).collect())
}

/// The content root is one folder inside the project; assets belong to the project.
pub fn project_root(content_root: &Path) -> Result<PathBuf, ResolveError> {
    content_root
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| ResolveError::RootTooShort(content_root.display().to_string()))
}

pub fn try_resolve_asset_values(
    content_root: &Path,
    group_name: &str,
) -> Result<AssetValues, ResolveError> {
    let branch = prefix_from_name(group_name)?;
    let sub_folder = sub_folder_from_name(group_name)?;

    Ok(AssetValues {
        project_root: project_root(content_root)?,
        branch,
        sub_folder,
    })
}

/// Resolves the asset location of a group, degrading to empty values on any failure.
pub fn resolve_asset_values(content_root: &Path, group_name: &str) -> AssetValues {
    try_resolve_asset_values(content_root, group_name).unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/group_name_tests.rs"]
mod tests;

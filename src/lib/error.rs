//! Failure kinds of the retrieval steps. Public getters never return these,
//! they match on them and fall back to default values.

use thiserror::Error;

/// Why a group name could not be turned into an asset location.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("group name '{0}' does not look like <year><letters>[-<number>]")]
    MalformedGroup(String),

    #[error("content root '{0}' has no parent folder")]
    RootTooShort(String),
}

/// Why changes for one day could not be obtained.
#[derive(Error, Debug)]
pub enum ChangesError {
    #[error("changes page could not be parsed: {0}")]
    Scrape(String),

    #[error("changes document could not be fetched: {0}")]
    Fetch(String),

    #[error("{0} timed out")]
    Timeout(&'static str),

    #[error("document contains changes for {found}, but {expected} was requested")]
    WrongDay { expected: String, found: String },

    #[error("changes document could not be read: {0}")]
    Read(String),
}

impl From<reqwest::Error> for ChangesError {
    fn from(error: reqwest::Error) -> Self {
        Self::Fetch(error.to_string())
    }
}

impl From<url::ParseError> for ChangesError {
    fn from(error: url::ParseError) -> Self {
        Self::Fetch(error.to_string())
    }
}

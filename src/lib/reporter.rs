use std::fmt;

use log::{error, info, warn};

/// Severity bands of reported problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Data missing, default value substituted
    DataMissing = 1,
    /// Referenced folder, file or document absent or mismatched
    ResourceAbsent = 2,
    /// Changes page could not be parsed
    ParseFailure = 3,
    /// Expected entry not found
    LookupMiss = 4,
}

impl Severity {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}", self.code())
    }
}

/// A trait, necessary for every entity that receives problems found while retrieving schedules.
/// Reporting must never fail and never block the caller.
pub trait ErrorReporter {
    fn report(&self, severity: Severity, message: &str);
}

/// Writes reports to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::DataMissing | Severity::ResourceAbsent => warn!("[{}] {}", severity, message),
            Severity::ParseFailure => error!("[{}] {}", severity, message),
            Severity::LookupMiss => info!("[{}] {}", severity, message),
        }
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &R {
    fn report(&self, severity: Severity, message: &str) {
        (**self).report(severity, message)
    }
}

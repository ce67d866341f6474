//! Day names: index to display name, raw page/file tokens to display name.

pub const DAYS_IN_WEEK: usize = 7;

const DAY_NAMES: [&str; DAYS_IN_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/* (raw token in lower case, index into DAY_NAMES), accusative forms included: "замены на среду" */
const RAW_TOKENS: [(&str, usize); 24] = [
    ("понедельник", 0),
    ("вторник", 1),
    ("среда", 2),
    ("четверг", 3),
    ("пятница", 4),
    ("суббота", 5),
    ("воскресенье", 6),
    ("среду", 2),
    ("пятницу", 4),
    ("субботу", 5),
    ("пн", 0),
    ("вт", 1),
    ("ср", 2),
    ("чт", 3),
    ("пт", 4),
    ("сб", 5),
    ("вс", 6),
    ("monday", 0),
    ("tuesday", 1),
    ("wednesday", 2),
    ("thursday", 3),
    ("friday", 4),
    ("saturday", 5),
    ("sunday", 6),
];

/// Display name of the day with the given index, 0 being Monday.
pub fn day_by_index(index: usize) -> Option<&'static str> {
    DAY_NAMES.get(index).copied()
}

/// Index of a known raw token, ignoring case and surrounding punctuation.
pub fn day_index_of(token: &str) -> Option<usize> {
    let token = token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    RAW_TOKENS
        .iter()
        .find(|(raw, _)| *raw == token)
        .map(|(_, index)| *index)
}

/// Translates a raw day token into its display name. Unknown tokens are returned as is.
pub fn translate_day(token: &str) -> String {
    day_index_of(token)
        .and_then(day_by_index)
        .map(str::to_owned)
        .unwrap_or_else(|| token.to_owned())
}

/// First word of `text` that names a day, as written. Abbreviations are ignored here,
/// they collide with ordinary words too often.
pub fn find_day_token(text: &str) -> Option<&str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() > 2)
        .find(|word| day_index_of(word).is_some())
}

/// Display name of the first day named in `text`.
pub fn find_day_in_text(text: &str) -> Option<&'static str> {
    find_day_token(text)
        .and_then(day_index_of)
        .and_then(day_by_index)
}

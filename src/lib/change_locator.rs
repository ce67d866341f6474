use chrono::{Datelike, Days, NaiveDate};

use crate::{
    days::translate_day,
    models::changes_model::{ChangeElement, MonthChanges},
};

/// Monday of the week `today` belongs to.
pub fn start_of_week(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(today.weekday().num_days_from_monday().into()))
        .unwrap_or(today)
}

/// Finds the entry published for `day_name` (a display name, e.g. `Monday`),
/// skipping entries of the weeks before the current one.
/// When several upcoming entries share the day, the earliest date wins.
pub fn find_element_by_day_without_previous_weeks<'a>(
    months: &'a [MonthChanges],
    day_name: &str,
    today: NaiveDate,
) -> Option<&'a ChangeElement> {
    let week_start = start_of_week(today);
    months
        .iter()
        .flat_map(|month| month.elements.iter())
        .filter(|element| element.date >= week_start)
        .filter(|element| translate_day(&element.day_of_week) == day_name)
        .min_by_key(|element| element.date)
}

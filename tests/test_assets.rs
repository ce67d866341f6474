use std::cell::RefCell;
use std::path::PathBuf;

use figment::providers::Format;
use figment::providers::Json;
use figment::Figment;
use lib::asset_getter::AssetGetter;
use lib::formatter::{to_compact_json, to_pretty_json};
use lib::models::schedule_model::{DaySchedule, WeekSchedule};
use lib::models::{Config, SiteSelectors};
use lib::reporter::{ErrorReporter, Severity};

#[derive(Default)]
pub struct TestReporter {
    pub reports: RefCell<Vec<(Severity, String)>>,
}

impl ErrorReporter for TestReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.reports.borrow_mut().push((severity, message.to_owned()));
    }
}

fn config() -> Config {
    Figment::new()
        .merge(Json::file("example.config.json"))
        .extract()
        .unwrap()
}

#[test]
fn example_config_is_complete() {
    let config = config();
    assert_eq!(config.content_root, PathBuf::from("./app"));
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.selectors, SiteSelectors::default());
    assert!(config.user_agent.starts_with("schedule-api/"));
}

#[test]
fn packaged_assets_are_discovered() {
    let reporter = TestReporter::default();
    let getter = AssetGetter::new(config().content_root, &reporter);

    assert_eq!(getter.list_branches().unwrap(), vec!["В", "П"]);
    assert_eq!(getter.list_sub_folders("П"), vec!["П"]);
    assert_eq!(getter.list_group_names("П", "П"), vec!["19П-3"]);
    assert!(reporter.reports.borrow().is_empty());
}

#[test]
fn packaged_week_is_translated_and_ordered() {
    let reporter = TestReporter::default();
    let getter = AssetGetter::new(config().content_root, &reporter);

    let week = getter.get_week_schedule("19п-3");
    assert_eq!(week.group_name, "19П-3");
    let days: Vec<&str> = week.days.iter().map(|day| day.day.as_str()).collect();
    assert_eq!(
        days,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
    assert_eq!(week.days[0].lessons.len(), 3);
    assert!(week.days[6].lessons.is_empty());
    assert!(reporter.reports.borrow().is_empty());
}

#[test]
fn schedule_survives_the_formatter() {
    let getter = AssetGetter::new(config().content_root, TestReporter::default());

    let tuesday = getter.get_day_schedule(1, "19П-3");
    let back: DaySchedule = serde_json::from_str(&to_pretty_json(&tuesday).unwrap()).unwrap();
    assert_eq!(back.day, tuesday.day);
    assert_eq!(back.lessons, tuesday.lessons);

    let week = getter.get_week_schedule("20ВЕБ-1");
    let back: WeekSchedule = serde_json::from_str(&to_compact_json(&week).unwrap()).unwrap();
    assert_eq!(back, week);
}

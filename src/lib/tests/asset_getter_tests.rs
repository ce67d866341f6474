use std::{cell::RefCell, fs, path::Path};

use tempfile::TempDir;

use crate::models::schedule_model::Lesson;

use super::*;

#[derive(Default)]
struct RecordingReporter {
    reports: RefCell<Vec<(Severity, String)>>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.reports.borrow_mut().push((severity, message.to_owned()));
    }
}

const WEEK_JSON: &str = r#"{
    "groupName": "19П-3",
    "days": [
        { "day": "Понедельник", "lessons": [
            { "number": 1, "name": "Математика", "teacherName": "Иванова А.А.", "place": "301" },
            { "number": 2, "name": "Физика", "teacherName": "Петров Б.Б.", "place": "214" }
        ] },
        { "day": "Вторник", "lessons": [] },
        { "day": "Среда", "lessons": [
            { "number": 3, "name": "Базы данных" }
        ] },
        { "day": "Четверг", "lessons": [] },
        { "day": "Пятница", "lessons": [] },
        { "day": "Суббота", "lessons": [] },
        { "day": "Воскресенье", "lessons": [] }
    ]
}"#;

/* <tmp>/project/app is the content root, <tmp>/project/Assets holds the schedules */
fn make_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir_all(project.join("app")).unwrap();
    fs::create_dir_all(project.join("Assets/П/П")).unwrap();
    fs::create_dir_all(project.join("Assets/В/ВЕБ")).unwrap();
    fs::write(project.join("Assets/П/П/19П-3.json"), WEEK_JSON).unwrap();
    fs::write(project.join("Assets/П/П/20П-1.json"), "null").unwrap();
    fs::write(project.join("Assets/П/П/21П-2.json"), "{ broken").unwrap();
    fs::write(
        project.join("Assets/В/ВЕБ/20ВЕБ-1.json"),
        r#"{ "groupName": "20ВЕБ-1", "days": [ { "day": "Понедельник", "lessons": [] } ] }"#,
    )
    .unwrap();
    dir
}

fn content_root(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("project").join("app")
}

#[test]
fn lists_branches_sub_folders_and_groups() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    assert_eq!(getter.list_branches().unwrap(), vec!["В", "П"]);
    assert_eq!(getter.list_sub_folders("В"), vec!["ВЕБ"]);
    assert_eq!(
        getter.list_group_names("П", "П"),
        vec!["19П-3", "20П-1", "21П-2"]
    );
    assert!(reporter.reports.borrow().is_empty());
}

#[test]
fn missing_folders_are_reported_and_listed_as_empty() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    assert!(getter.list_sub_folders("Ю").is_empty());
    assert!(getter.list_group_names("П", "БД").is_empty());

    let reports = reporter.reports.borrow();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|(severity, _)| *severity == Severity::ResourceAbsent));
}

#[test]
fn missing_assets_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let getter = AssetGetter::new(dir.path().join("app"), RecordingReporter::default());
    assert!(getter.list_branches().is_err());
}

#[test]
fn day_schedule_is_read_and_translated() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    let monday = getter.get_day_schedule(0, "19п-3");
    assert_eq!(monday.day, "Monday");
    assert_eq!(
        monday.lessons,
        vec![
            Lesson {
                number: 1,
                name: "Математика".to_owned(),
                teacher_name: "Иванова А.А.".to_owned(),
                place: "301".to_owned(),
            },
            Lesson {
                number: 2,
                name: "Физика".to_owned(),
                teacher_name: "Петров Б.Б.".to_owned(),
                place: "214".to_owned(),
            },
        ]
    );

    let wednesday = getter.get_day_schedule(2, "19П-3");
    assert_eq!(wednesday.day, "Wednesday");
    assert_eq!(wednesday.lessons[0].teacher_name, "");
    assert!(reporter.reports.borrow().is_empty());
}

#[test]
fn every_index_gets_its_own_day() {
    let dir = make_project();
    let getter = AssetGetter::new(content_root(&dir), RecordingReporter::default());
    for index in 0..DAYS_IN_WEEK {
        assert_eq!(
            getter.get_day_schedule(index, "19П-3").day,
            crate::days::day_by_index(index).unwrap()
        );
    }
}

#[test]
fn missing_file_gives_default_day_and_one_report() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    let day = getter.get_day_schedule(0, "19П-4");
    assert_eq!(day, DaySchedule::new("Monday", Vec::new()));

    let reports = reporter.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, Severity::DataMissing);
    assert!(reports[0].1.contains("19П-4"));
}

#[test]
fn example_group_without_file_gives_empty_monday() {
    let dir = tempfile::tempdir().unwrap();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(dir.path().join("app"), &reporter);

    assert_eq!(
        getter.get_day_schedule(0, "19П-3"),
        DaySchedule::new("Monday", Vec::new())
    );
    let reports = reporter.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].1.contains("19П-3"));
}

#[test]
fn unresolvable_group_is_reported_once() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    assert_eq!(getter.get_day_schedule(3, "nonsense").day, "Thursday");
    assert_eq!(reporter.reports.borrow().len(), 1);
}

#[test]
fn null_and_broken_files_fall_back() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    assert!(getter.get_day_schedule(1, "20П-1").lessons.is_empty());
    assert!(getter.get_day_schedule(1, "21П-2").lessons.is_empty());
    assert_eq!(reporter.reports.borrow().len(), 2);
}

#[test]
fn absent_day_is_not_indexed_out_of_range() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    assert_eq!(
        getter.get_day_schedule(4, "20ВЕБ-1"),
        DaySchedule::new("Friday", Vec::new())
    );
    assert_eq!(getter.get_day_schedule(9, "20ВЕБ-1").day, "Monday");
    assert_eq!(reporter.reports.borrow().len(), 2);
}

#[test]
fn week_keeps_seven_days_when_every_lookup_fails() {
    let dir = tempfile::tempdir().unwrap();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(dir.path().join("app"), &reporter);

    let week = getter.get_week_schedule("19п-3");
    assert_eq!(week.group_name, "19П-3");
    assert_eq!(week.days, WeekSchedule::default().days);
    assert_eq!(reporter.reports.borrow().len(), DAYS_IN_WEEK);
}

#[test]
fn week_mixes_found_and_missing_days() {
    let dir = make_project();
    let reporter = RecordingReporter::default();
    let getter = AssetGetter::new(content_root(&dir), &reporter);

    let week = getter.get_week_schedule("20ВЕБ-1");
    let names: Vec<&str> = week.days.iter().map(|day| day.day.as_str()).collect();
    assert_eq!(
        names,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
    assert_eq!(reporter.reports.borrow().len(), DAYS_IN_WEEK - 1);
}

#[test]
fn read_week_schedule_translates_every_day() {
    let dir = make_project();
    let path: &Path = &dir.path().join("project/Assets/П/П/19П-3.json");
    let week = read_week_schedule(path).unwrap().unwrap();
    assert_eq!(week.days[6].day, "Sunday");
}

mod common;

use std::fs;

use common::setup_test_env;
use todo_core::{
    codec,
    core::{CategorySession, SettingsStore},
    CategoryKey, DueDate, DueTime, Plan,
};

#[test]
fn default_names_and_buy_milk_round_trip() {
    let (_, settings, plans) = setup_test_env();
    let names: Vec<_> = CategoryKey::ALL
        .iter()
        .map(|key| settings.name(*key).to_string())
        .collect();
    assert_eq!(names, ["Class 1", "Class 2", "Class 3", "Class 4"]);

    let mut session = CategorySession::open(&plans, settings.settings(), "Class 1").unwrap();
    session.begin_add().unwrap();
    session
        .commit_add(
            Plan::new("Buy milk")
                .with_due(Some(DueDate::new(5, 6)))
                .with_time(Some(DueTime::new(14, 30))),
        )
        .unwrap();
    session.close(&plans).unwrap();

    let lines = plans.load(settings.settings(), "Class 1");
    assert_eq!(lines, vec!["Buy milk | Due: 5/6 | Time: 14:30".to_string()]);

    let mut reopened = CategorySession::open(&plans, settings.settings(), "Class 1").unwrap();
    let stored = reopened.view().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].description, "Buy milk");
    assert_eq!(stored[0].due, Some(DueDate::new(5, 6)));
    assert_eq!(stored[0].time, Some(DueTime::new(14, 30)));
}

#[test]
fn deleting_the_only_plan_writes_an_empty_file() {
    let (_, settings, plans) = setup_test_env();
    plans.save(settings.settings(), "Class 2", &["Pay rent".to_string()]);

    let mut session = CategorySession::open(&plans, settings.settings(), "Class 2").unwrap();
    session.view().unwrap();
    session.begin_delete(0).unwrap();
    session.confirm_delete().unwrap();
    session.close(&plans).unwrap();

    let raw = fs::read_to_string(plans.plan_path(CategoryKey::B)).unwrap();
    assert_eq!(raw.lines().count(), 0);
}

#[test]
fn empty_rename_keeps_the_previous_name() {
    let (base, mut settings, _) = setup_test_env();
    settings.rename(CategoryKey::A, "Homework").unwrap();

    assert!(settings.rename(CategoryKey::A, "").is_err());
    assert_eq!(settings.name(CategoryKey::A), "Homework");
    assert_eq!(SettingsStore::open(&base).name(CategoryKey::A), "Homework");
}

#[test]
fn renamed_category_keeps_its_plans() {
    let (_, mut settings, plans) = setup_test_env();
    plans.save(settings.settings(), "Class 3", &["Sweep | Due: 1/1".to_string()]);

    settings.rename(CategoryKey::C, "Chores").unwrap();
    assert!(plans.load(settings.settings(), "Class 3").is_empty());
    assert_eq!(
        codec::decode_all(&plans.load(settings.settings(), "Chores")),
        vec![Plan::new("Sweep").with_due(Some(DueDate::new(1, 1)))]
    );
}

#[test]
fn settings_file_is_created_and_corruption_tolerated() {
    let (base, settings, _) = setup_test_env();
    let path = settings.settings_path();
    assert!(path.exists());

    let json = fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"A\": \"Class 1\""));

    fs::write(&path, "[1, 2, 3]").unwrap();
    let reloaded = SettingsStore::open(&base);
    assert_eq!(reloaded.name(CategoryKey::D), "Class 4");

    fs::write(&path, r#"{"A": "Maths", "Z": "Extra"}"#).unwrap();
    assert_eq!(SettingsStore::open(&base).name(CategoryKey::A), "Class 1");
}

#[test]
fn hand_edited_lines_decode_leniently() {
    let (_, settings, plans) = setup_test_env();
    fs::write(
        plans.plan_path(CategoryKey::D),
        "  Read book | Due: 40/1 | Mood: calm \n\n Gym | Time: 6:5\n",
    )
    .unwrap();

    let session = CategorySession::open(&plans, settings.settings(), "Class 4").unwrap();
    assert_eq!(
        session.plans(),
        &[
            Plan::new("Read book"),
            Plan::new("Gym").with_time(Some(DueTime::new(6, 5))),
        ]
    );
    assert_eq!(
        session.lines(),
        vec!["Read book".to_string(), "Gym | Time: 6:05".to_string()]
    );
}

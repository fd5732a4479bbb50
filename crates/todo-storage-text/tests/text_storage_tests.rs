use std::fs;

use tempfile::tempdir;
use todo_domain::CategoryKey;
use todo_services::{storage::PlanStorage, CoreError};
use todo_storage_text::{clean_lines, TextPlanStorage};

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn text_storage_can_save_and_load_lines() {
    let dir = tempdir().expect("tempdir");
    let storage = TextPlanStorage::new(dir.path().join("plans")).expect("create storage");

    let stored = lines(&["Buy milk | Due: 5/6 | Time: 14:30", "Call home"]);
    storage
        .save_lines(CategoryKey::A, &stored)
        .expect("save lines");

    let loaded = storage.load_lines(CategoryKey::A).expect("load lines");
    assert_eq!(loaded, stored);

    let path = storage.plan_path(CategoryKey::A);
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("plans_a.txt")
    );
    assert_eq!(
        fs::read_to_string(&path).expect("raw file"),
        "Buy milk | Due: 5/6 | Time: 14:30\nCall home\n"
    );
}

#[test]
fn categories_use_separate_files() {
    let dir = tempdir().expect("tempdir");
    let storage = TextPlanStorage::new(dir.path().to_path_buf()).expect("create storage");

    storage
        .save_lines(CategoryKey::B, &lines(&["Only in B"]))
        .expect("save B");

    assert!(storage.load_lines(CategoryKey::C).expect("load C").is_empty());
    assert_eq!(
        storage.load_lines(CategoryKey::B).expect("load B"),
        lines(&["Only in B"])
    );
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = tempdir().expect("tempdir");
    let storage = TextPlanStorage::new(dir.path().join("plans")).expect("create storage");

    assert!(storage.load_lines(CategoryKey::D).expect("load").is_empty());
    assert!(!storage.plan_path(CategoryKey::D).exists());
}

#[test]
fn blank_lines_are_skipped_and_lines_trimmed() {
    let dir = tempdir().expect("tempdir");
    let storage = TextPlanStorage::new(dir.path().to_path_buf()).expect("create storage");
    fs::write(
        storage.plan_path(CategoryKey::A),
        "\n  First  \n\n\t\nSecond\r\n",
    )
    .expect("write raw file");

    assert_eq!(
        storage.load_lines(CategoryKey::A).expect("load"),
        lines(&["First", "Second"])
    );
    assert_eq!(clean_lines(""), Vec::<String>::new());
}

#[test]
fn saving_an_empty_list_leaves_an_empty_file() {
    let dir = tempdir().expect("tempdir");
    let storage = TextPlanStorage::new(dir.path().to_path_buf()).expect("create storage");
    storage
        .save_lines(CategoryKey::C, &lines(&["Temporary"]))
        .expect("save");

    storage.save_lines(CategoryKey::C, &[]).expect("overwrite");

    let raw = fs::read_to_string(storage.plan_path(CategoryKey::C)).expect("raw file");
    assert!(raw.is_empty());
}

#[test]
fn unreadable_target_reports_storage_error() {
    let dir = tempdir().expect("tempdir");
    let storage = TextPlanStorage::new(dir.path().to_path_buf()).expect("create storage");
    fs::create_dir_all(storage.plan_path(CategoryKey::B)).expect("directory in place of file");

    assert!(matches!(
        storage.load_lines(CategoryKey::B),
        Err(CoreError::Storage {
            key: CategoryKey::B,
            ..
        })
    ));
}

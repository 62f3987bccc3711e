// Rust guideline compliant 2026-10-13

//! Unit tests for the storage module.
//!
//! These tests validate specific examples, edge cases, and error conditions.

use folio_core::{Contact, Error, Experience, Project, Section, Storage};
use std::fs;
use tempfile::TempDir;

fn create_test_experience(company: &str) -> Experience {
    Experience {
        company: company.to_string(),
        position: "Engineer".to_string(),
        start_date: "2021-02".to_string(),
        skills: vec!["Rust".to_string(), "C, C++".to_string()],
        ..Experience::default()
    }
}

fn setup() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("content")).expect("Failed to create storage");
    storage.init().expect("Failed to init storage");
    (temp_dir, storage)
}

#[test]
fn test_init_creates_every_collection() {
    let (_temp_dir, storage) = setup();
    for section in Section::ALL {
        assert!(storage.collection_path(section).exists(), "{section} missing");
    }
}

#[test]
fn test_empty_collection_lists_nothing() {
    let (_temp_dir, storage) = setup();
    assert!(storage.list::<Experience>().unwrap().is_empty());
}

#[test]
fn test_missing_collection_lists_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(temp_dir.path().join("absent")).unwrap();
    assert!(storage.list::<Project>().unwrap().is_empty());
}

#[test]
fn test_empty_path_is_rejected() {
    assert!(Storage::new(std::path::PathBuf::new()).is_err());
}

#[test]
fn test_create_assigns_id() {
    let (_temp_dir, storage) = setup();
    let created = storage.create(create_test_experience("Acme")).unwrap();
    assert!(created.id.starts_with("exp-"));

    let loaded: Experience = storage.get(&created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn test_create_same_title_twice_gets_distinct_ids() {
    let (_temp_dir, storage) = setup();
    let first = storage.create(create_test_experience("Acme")).unwrap();
    let second = storage.create(create_test_experience("Acme")).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(storage.list::<Experience>().unwrap().len(), 2);
}

#[test]
fn test_create_rejects_duplicate_id() {
    let (_temp_dir, storage) = setup();
    let created = storage.create(create_test_experience("Acme")).unwrap();
    let result = storage.create(created.clone());
    assert!(matches!(result, Err(Error::Duplicate(id)) if id == created.id));
}

#[test]
fn test_create_rejects_invalid_record() {
    let (_temp_dir, storage) = setup();
    let mut experience = create_test_experience("Acme");
    experience.position = "  ".to_string();
    assert!(matches!(
        storage.create(experience),
        Err(Error::InvalidRecord(_))
    ));
    assert!(storage.list::<Experience>().unwrap().is_empty());
}

#[test]
fn test_update_replaces_record() {
    let (_temp_dir, storage) = setup();
    let mut created = storage.create(create_test_experience("Acme")).unwrap();
    created.end_date = Some("Present".to_string());
    created.skills.push("SQL".to_string());
    storage.update(&created).unwrap();

    let loaded: Experience = storage.get(&created.id).unwrap();
    assert_eq!(loaded.end_date.as_deref(), Some("Present"));
    assert_eq!(loaded.skills, vec!["Rust", "C, C++", "SQL"]);
}

#[test]
fn test_update_missing_record() {
    let (_temp_dir, storage) = setup();
    let mut experience = create_test_experience("Acme");
    experience.id = "exp-abcdef".to_string();
    assert!(matches!(storage.update(&experience), Err(Error::NotFound(_))));
}

#[test]
fn test_delete_returns_removed_record() {
    let (_temp_dir, storage) = setup();
    let keep = storage.create(create_test_experience("Keep")).unwrap();
    let drop = storage.create(create_test_experience("Drop")).unwrap();

    let removed: Experience = storage.delete(&drop.id).unwrap();
    assert_eq!(removed, drop);

    let remaining = storage.list::<Experience>().unwrap();
    assert_eq!(remaining, vec![keep]);
    assert!(matches!(
        storage.delete::<Experience>(&drop.id),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_sections_are_independent() {
    let (_temp_dir, storage) = setup();
    storage.create(create_test_experience("Acme")).unwrap();
    storage
        .create(Contact {
            platform: "GitHub".to_string(),
            url: "https://github.com/jane".to_string(),
            ..Contact::default()
        })
        .unwrap();

    assert_eq!(storage.list::<Experience>().unwrap().len(), 1);
    assert_eq!(storage.list::<Contact>().unwrap().len(), 1);
    assert!(storage.list::<Project>().unwrap().is_empty());
}

#[test]
fn test_malformed_lines_are_skipped() {
    let (_temp_dir, storage) = setup();
    let content = r#"{"id":"prj-123456","title":"Valid Project"}
not json at all

{"id":"prj-234567","title":"Legacy Project","technologies":"Rust, Go"}
"#;
    fs::write(storage.collection_path(Section::Projects), content).unwrap();

    let projects = storage.list::<Project>().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "prj-123456");
    assert_eq!(projects[1].technologies, vec!["Rust", "Go"]);
}

#[test]
fn test_saved_file_is_one_line_per_record() {
    let (_temp_dir, storage) = setup();
    storage.create(create_test_experience("A")).unwrap();
    storage.create(create_test_experience("B")).unwrap();

    let content = fs::read_to_string(storage.collection_path(Section::Experience)).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["skills"].is_array());
    }
}

#[test]
fn test_resolve_partial_id() {
    let (_temp_dir, storage) = setup();
    let created = storage.create(create_test_experience("Acme")).unwrap();
    let hash = created.id.trim_start_matches("exp-");

    assert_eq!(
        storage.resolve_id::<Experience>(&hash[..4]).unwrap(),
        created.id
    );
    assert!(matches!(
        storage.resolve_id::<Experience>("zzzz"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_lock_is_released_after_error() {
    let (_temp_dir, storage) = setup();
    let result: folio_core::Result<()> = storage.with_lock(Section::Projects, || {
        Err(Error::InvalidRecord("boom".to_string()))
    });
    assert!(result.is_err());

    let second = storage.with_lock(Section::Projects, || Ok(42));
    assert_eq!(second.unwrap(), 42);
}

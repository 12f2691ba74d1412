use email_triage::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

/// Storage that fails reads or writes on demand and records removals
#[derive(Default)]
struct FlakyStorage {
    fail_read: bool,
    fail_write: bool,
    removed: AtomicBool,
}

fn io_failure(kind: std::io::ErrorKind) -> HistoryError {
    HistoryError::Io {
        path: "history.json".into(),
        source: std::io::Error::from(kind),
    }
}

impl HistoryStorage for FlakyStorage {
    fn read(&self) -> std::result::Result<Option<String>, HistoryError> {
        if self.fail_read {
            Err(io_failure(std::io::ErrorKind::PermissionDenied))
        } else {
            Ok(None)
        }
    }

    fn write(&self, _data: &str) -> std::result::Result<(), HistoryError> {
        if self.fail_write {
            Err(io_failure(std::io::ErrorKind::StorageFull))
        } else {
            Ok(())
        }
    }

    fn remove(&self) -> std::result::Result<(), HistoryError> {
        self.removed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

fn classification(category: Category) -> EmailClassification {
    EmailClassification {
        category,
        priority: Priority::Medium,
        suggested_recipient: "info@example.com".into(),
        summary: format!("{category} email"),
    }
}

// --- MemoryStorage ---

#[test]
fn test_load_empty_storage() {
    let history = History::load(MemoryStorage::new());
    assert!(history.is_empty());
    assert!(history.storage().contents().is_none());
}

#[test]
fn test_append_newest_first_and_persisted() {
    let mut history = History::load(MemoryStorage::new());
    history
        .append("first email", classification(Category::Sales))
        .unwrap();
    history
        .append("second email", classification(Category::Billing))
        .unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.entries()[0].email_content, "second email");
    assert_eq!(history.entries()[1].email_content, "first email");

    let stored: serde_json::Value =
        serde_json::from_str(&history.storage().contents().unwrap()).unwrap();
    let array = stored.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["emailContent"], "second email");
    assert_eq!(array[0]["classification"]["category"], "Billing");
}

#[test]
fn test_append_returns_entry_with_metadata() {
    let mut history = History::load(MemoryStorage::new());
    let entry = history
        .append("hello", classification(Category::Support))
        .unwrap()
        .clone();

    assert!(!entry.id.is_empty());
    assert!(entry.id.chars().all(|c| c.is_ascii_digit()));
    assert!(entry.timestamp.contains(", "));
    assert_eq!(history.get(&entry.id), Some(&entry));
}

#[test]
fn test_ids_unique_for_rapid_appends() {
    let mut history = History::load(MemoryStorage::new());
    for _ in 0..20 {
        history
            .append("same email", classification(Category::Marketing))
            .unwrap();
    }

    let ids: HashSet<&str> = history.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_reload_restores_entries() {
    let mut history = History::load(MemoryStorage::new());
    history
        .append("persist me", classification(Category::GeneralInquiry))
        .unwrap();
    let saved = history.storage().contents().unwrap();

    let reloaded = History::load(MemoryStorage::with_data(saved));
    assert_eq!(reloaded.entries(), history.entries());
}

#[test]
fn test_corrupt_data_discarded() {
    let history = History::load(MemoryStorage::with_data("{not json"));

    assert!(history.is_empty());
    assert!(history.storage().contents().is_none());
}

#[test]
fn test_wrong_shape_discarded_wholesale() {
    let data = r#"[{"id":"1","timestamp":"t","emailContent":"ok","classification":{"category":"Support","priority":"High","suggestedRecipient":"support@example.com","summary":"s"}},{"id":"2"}]"#;
    let history = History::load(MemoryStorage::with_data(data));

    assert!(history.is_empty());
    assert!(history.storage().contents().is_none());
}

#[test]
fn test_unreadable_storage_is_kept() {
    let history = History::load(FlakyStorage {
        fail_read: true,
        ..FlakyStorage::default()
    });

    assert!(history.is_empty());
    assert!(!history.storage().removed.load(Ordering::SeqCst));
}

#[test]
fn test_failed_save_leaves_list_unchanged() {
    let mut history = History::load(FlakyStorage {
        fail_write: true,
        ..FlakyStorage::default()
    });

    let err = history
        .append("never stored", classification(Category::Support))
        .unwrap_err();

    assert!(matches!(err, HistoryError::Io { .. }));
    assert!(history.is_empty());
}

#[test]
fn test_clear_removes_everything() {
    let mut history = History::load(MemoryStorage::new());
    history
        .append("bye", classification(Category::Sales))
        .unwrap();

    history.clear().unwrap();

    assert!(history.is_empty());
    assert!(history.storage().contents().is_none());
}

#[test]
fn test_get_unknown_id() {
    let history = History::load(MemoryStorage::new());
    assert!(history.get("missing").is_none());
}

// --- FileStorage ---

#[test]
fn test_file_storage_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");

    let mut history = History::load(FileStorage::new(&path));
    history
        .append("From: a@b.com\nSubject: Hi\nBody", classification(Category::Support))
        .unwrap();
    assert!(path.exists());

    let reloaded = History::load(FileStorage::new(&path));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(
        reloaded.entries()[0].email_content,
        "From: a@b.com\nSubject: Hi\nBody"
    );
}

#[test]
fn test_file_storage_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let history = History::load(FileStorage::new(dir.path().join("none.json")));

    assert!(history.is_empty());
}

#[test]
fn test_file_storage_corrupt_file_removed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "garbage").unwrap();

    let history = History::load(FileStorage::new(&path));

    assert!(history.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_file_storage_clear_deletes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut history = History::load(FileStorage::new(&path));
    history
        .append("x", classification(Category::Billing))
        .unwrap();
    history.clear().unwrap();

    assert!(!path.exists());
    history.clear().unwrap();
}

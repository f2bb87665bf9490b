use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use dock_core::storage::{load_dashboard, save_dashboard, JsonFileStore};
use dock_core::{Dashboard, DockError, NoteBody, NoteCodec};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.json", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

const PASSWORD: &str = "correct horse battery";
const SECRET: &str = "PIN 4921 for the side door";

fn dashboard_with_secret(codec: &NoteCodec) -> (Dashboard, String, String) {
    let mut dashboard = Dashboard::new();
    let cat = dashboard.add_category("Vault").expect("add category");
    let item = dashboard
        .add_item(&cat, "Office", "https://example.com/office")
        .expect("add item");
    let body = NoteBody::seal(SECRET, codec, PASSWORD).expect("seal should succeed");
    dashboard
        .set_note(&cat, &item, Some(body))
        .expect("set note");
    (dashboard, cat, item)
}

#[test]
fn test_encrypted_note_survives_store_round_trip() {
    let temp = TempFile::new("dock_note_round_trip");
    let codec = NoteCodec::new();
    let (dashboard, cat, item) = dashboard_with_secret(&codec);

    let mut store = JsonFileStore::open(&temp.path).expect("open should succeed");
    save_dashboard(&mut store, &dashboard).expect("save should succeed");
    drop(store);

    let store = JsonFileStore::open(&temp.path).expect("reopen should succeed");
    let loaded = load_dashboard(&store).expect("load should succeed");
    assert_eq!(loaded, dashboard);

    let note = loaded
        .item(&cat, &item)
        .expect("item exists")
        .info_details
        .clone()
        .expect("note exists");
    assert!(note.is_encrypted());
    assert_eq!(
        note.reveal(&codec, Some(PASSWORD)).expect("reveal should succeed"),
        SECRET
    );
}

#[test]
fn test_data_file_never_contains_plaintext() {
    let temp = TempFile::new("dock_no_plaintext");
    let codec = NoteCodec::new();
    let (dashboard, _, _) = dashboard_with_secret(&codec);

    let mut store = JsonFileStore::open(&temp.path).expect("open should succeed");
    save_dashboard(&mut store, &dashboard).expect("save should succeed");

    let on_disk = fs::read_to_string(&temp.path).expect("read should succeed");
    assert!(!on_disk.contains("4921"));
    assert!(!on_disk.contains(PASSWORD));
    assert!(on_disk.contains("\"ciphertext\""));
}

#[test]
fn test_wrong_password_cannot_overwrite_stored_note() {
    let temp = TempFile::new("dock_refuse_overwrite");
    let codec = NoteCodec::new();
    let (mut dashboard, cat, item) = dashboard_with_secret(&codec);

    let mut store = JsonFileStore::open(&temp.path).expect("open should succeed");
    save_dashboard(&mut store, &dashboard).expect("save should succeed");

    let current = dashboard
        .item(&cat, &item)
        .expect("item exists")
        .info_details
        .clone()
        .expect("note exists");
    let result = current.replace("overwritten", &codec, Some("not the password"), true);
    assert!(matches!(result, Err(DockError::DecryptionFailed)));

    // Nothing changed, so a save is a no-op on content.
    save_dashboard(&mut store, &dashboard).expect("save should succeed");
    let loaded = load_dashboard(&store).expect("load should succeed");
    let note = loaded.item(&cat, &item).expect("item exists").info_details.clone();
    assert_eq!(note, Some(current.clone()));

    // The right password does allow the replacement.
    let replaced = current
        .replace("updated", &codec, Some(PASSWORD), true)
        .expect("replace should succeed");
    dashboard
        .set_note(&cat, &item, Some(replaced))
        .expect("set note");
    save_dashboard(&mut store, &dashboard).expect("save should succeed");

    let loaded = load_dashboard(&store).expect("load should succeed");
    let note = loaded
        .item(&cat, &item)
        .expect("item exists")
        .info_details
        .clone()
        .expect("note exists");
    assert_eq!(
        note.reveal(&codec, Some(PASSWORD)).expect("reveal should succeed"),
        "updated"
    );
}

#[test]
fn test_corrupt_data_file_is_reported() {
    let temp = TempFile::new("dock_corrupt");
    fs::write(&temp.path, "{\"shortTabData\": [").expect("write should succeed");

    let result = JsonFileStore::open(&temp.path);
    assert!(matches!(result, Err(DockError::Storage(_))));
}

use std::fs;

use tempfile::TempDir;
use wordtrix_core::{with_session, AnagramPair, Collection, CoreError, JsonFileStore, Session, Store};

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("words.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_writes_four_space_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    let mut store = JsonFileStore::new(&path);
    store.save(&[AnagramPair::new("stop", "pots")]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "[\n    {\n        \"subject1\": \"stop\",\n        \"subject2\": \"pots\"\n    }\n]"
    );
}

#[test]
fn save_creates_parent_dirs_and_replaces() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("db").join("words.json");
    let mut store = JsonFileStore::new(&path);

    store
        .save(&[AnagramPair::new("stop", "pots"), AnagramPair::new("listen", "silent")])
        .unwrap();
    store.save(&[AnagramPair::new("evil", "vile")]).unwrap();

    assert_eq!(store.load().unwrap(), vec![AnagramPair::new("evil", "vile")]);
}

#[test]
fn malformed_file_is_format_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, CoreError::Format { ref file, .. } if file == &path));
}

#[test]
fn reads_file_written_by_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");
    fs::write(
        &path,
        r#"[{"subject1": "Dormitory", "subject2": "dirty room"}, {"subject1": "stop", "subject2": "pots"}]"#,
    )
    .unwrap();

    let collection = Collection::from_records(JsonFileStore::new(&path).load().unwrap());
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.find_matches("tops")[0].position, 2);
}

#[test]
fn sessions_persist_across_invocations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.json");

    with_session(JsonFileStore::new(&path), |c| {
        c.check("stop", "pots").unwrap();
        c.check("listen", "silent").unwrap();
    })
    .unwrap();

    let mut session = Session::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(session.collection().len(), 2);
    session.collection_mut().delete(1).unwrap();
    session.close().unwrap();

    let records = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(records, vec![AnagramPair::new("listen", "silent")]);
}

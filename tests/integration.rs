use std::fs;

use tempfile::TempDir;

use media_store::StoreError;
use media_store::payload::Payload;
use media_store::storage::{SharedStore, Store};

/// Store over two throwaway directories, returned alongside their guards so
/// they live for the duration of the test.
fn test_store() -> (Store, TempDir, TempDir) {
    let _ = env_logger::builder().is_test(true).try_init();
    let base = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let store = Store::new(base.path(), temp.path(), "Media");
    (store, base, temp)
}

#[test]
fn write_then_read_round_trips() {
    let (store, _base, _temp) = test_store();

    let path = store
        .write(b"Hello, World!".as_slice(), Some("test_data"), None, "txt")
        .unwrap();
    assert!(path.to_string_lossy().ends_with("test_data.txt"));

    let result = store.read("test_data.txt").unwrap();
    assert_eq!(result.payload.as_bytes(), b"Hello, World!");
    assert!(
        result
            .temp_copy_path
            .to_string_lossy()
            .ends_with("test_data_temp.txt")
    );

    // The temp copy is an observable side effect, bit-identical to the source
    let copy = fs::read(&result.temp_copy_path).unwrap();
    assert_eq!(copy, b"Hello, World!");
}

#[test]
fn write_places_files_under_the_media_directory() {
    let (store, base, _temp) = test_store();

    let path = store.write(vec![1u8, 2, 3], Some("blob"), None, "bin").unwrap();
    assert_eq!(path, base.path().join("Media").join("blob.bin"));
    assert!(path.is_file());
}

#[test]
fn write_with_explicit_directory() {
    let (store, base, _temp) = test_store();

    let path = store
        .write(b"backup".as_slice(), Some("snapshot"), Some("Backups"), "dat")
        .unwrap();
    assert_eq!(path, base.path().join("Backups").join("snapshot.dat"));
    assert!(path.is_file());
}

#[test]
fn write_without_name_uses_the_id_generator() {
    let _ = env_logger::builder().is_test(true).try_init();
    let base = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let store = Store::new(base.path(), temp.path(), "Media")
        .with_id_generator(Box::new(|| "generated-id".to_string()));

    let path = store.write(b"x".as_slice(), None, None, "txt").unwrap();
    assert!(path.to_string_lossy().ends_with("generated-id.txt"));
}

#[test]
fn write_with_empty_name_fails() {
    let (store, base, _temp) = test_store();

    // An empty name would produce `.txt`, which read can never resolve
    let err = store
        .write(b"orphan".as_slice(), Some(""), None, "txt")
        .unwrap_err();
    assert!(matches!(err, StoreError::FileNameMissing));
    assert!(!base.path().join("Media").join(".txt").exists());
}

#[test]
fn write_with_separator_in_name_fails() {
    let (store, base, _temp) = test_store();

    let err = store
        .write(b"escape".as_slice(), Some("../escapee"), None, "txt")
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidFilePath(_)));

    // Nothing may land outside the media directory
    assert!(!base.path().join("escapee.txt").exists());
    assert!(!base.path().join("Media").exists());
}

#[test]
fn write_with_separator_in_directory_fails() {
    let (store, base, _temp) = test_store();

    let err = store
        .write(b"escape".as_slice(), Some("file"), Some("../outside"), "txt")
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidFilePath(_)));
    assert!(!base.path().join("outside").exists());
}

#[test]
fn write_with_empty_extension_fails() {
    let (store, _base, _temp) = test_store();

    let err = store
        .write(b"payload".as_slice(), Some("name"), None, "")
        .unwrap_err();
    assert!(matches!(err, StoreError::FileTypeMissing));
}

#[test]
fn read_of_extensionless_path_fails() {
    let (store, _base, _temp) = test_store();

    let err = store.read("no_extension").unwrap_err();
    assert!(matches!(err, StoreError::FileComponentTooSmall(_)));
}

#[test]
fn read_of_missing_file_fails() {
    let (store, _base, _temp) = test_store();

    let err = store.read("never_written.txt").unwrap_err();
    assert!(matches!(err, StoreError::FileNotFound(_)));
}

#[test]
fn read_resolves_only_the_trailing_component() {
    let (store, _base, _temp) = test_store();

    store
        .write(b"nested".as_slice(), Some("photo"), None, "png")
        .unwrap();

    let result = store.read("some/leading/dirs/photo.png").unwrap();
    assert_eq!(result.payload.as_bytes(), b"nested");
}

#[test]
fn remove_deletes_a_written_file() {
    let (store, _base, _temp) = test_store();

    let path = store
        .write(b"gone soon".as_slice(), Some("doomed"), None, "txt")
        .unwrap();
    assert!(path.is_file());

    store.remove("doomed", "txt", None).unwrap();
    assert!(!path.exists());
}

#[test]
fn remove_of_never_written_file_fails() {
    let (store, _base, _temp) = test_store();

    let err = store.remove("ghost", "txt", None).unwrap_err();
    assert!(matches!(err, StoreError::FileNotFound(_)));
}

#[test]
fn remove_all_empties_the_directory_but_keeps_it() {
    let (store, base, _temp) = test_store();

    store.write(b"a".as_slice(), Some("a"), None, "txt").unwrap();
    store.write(b"b".as_slice(), Some("b"), None, "txt").unwrap();

    // Child directories count as direct children too
    let media_dir = base.path().join("Media");
    fs::create_dir(media_dir.join("nested")).unwrap();
    fs::write(media_dir.join("nested").join("inner.txt"), b"c").unwrap();

    store.remove_all(None).unwrap();

    assert!(media_dir.is_dir());
    assert_eq!(fs::read_dir(&media_dir).unwrap().count(), 0);
}

#[test]
fn remove_all_of_missing_directory_fails() {
    let (store, _base, _temp) = test_store();

    let err = store.remove_all(Some("NeverCreated")).unwrap_err();
    assert!(matches!(err, StoreError::FileNotFound(_)));
}

#[test]
fn remove_temp_deletes_the_read_side_copy() {
    let (store, _base, temp) = test_store();

    store
        .write(b"copy me".as_slice(), Some("source"), None, "txt")
        .unwrap();
    let result = store.read("source.txt").unwrap();
    assert!(result.temp_copy_path.is_file());

    store.remove_temp("source_temp", "txt").unwrap();
    assert!(!result.temp_copy_path.exists());
    assert!(temp.path().is_dir());
}

#[test]
fn remove_temp_of_missing_file_fails() {
    let (store, _base, _temp) = test_store();

    let err = store.remove_temp("ghost_temp", "txt").unwrap_err();
    assert!(matches!(err, StoreError::FileNotFound(_)));
}

#[test]
fn remove_all_temp_empties_the_temp_directory() {
    let (store, _base, temp) = test_store();

    store
        .write(b"one".as_slice(), Some("one"), None, "txt")
        .unwrap();
    store
        .write(b"two".as_slice(), Some("two"), None, "txt")
        .unwrap();
    store.read("one.txt").unwrap();
    store.read("two.txt").unwrap();
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);

    store.remove_all_temp().unwrap();
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn payload_from_reader_round_trips_through_the_store() {
    let (store, _base, _temp) = test_store();

    let payload = Payload::from_reader(std::io::Cursor::new(b"streamed".to_vec())).unwrap();
    store.write(payload, Some("streamed"), None, "bin").unwrap();

    let result = store.read("streamed.bin").unwrap();
    assert_eq!(result.payload.as_bytes(), b"streamed");
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
#[test]
fn pictures_sink_writes_one_file_with_the_kind_extension() {
    use media_store::media::{MediaKind, MediaSink, PicturesSink};

    let dir = TempDir::new().unwrap();
    let sink = PicturesSink::at(dir.path());

    sink.save(&Payload::from(b"not really a png".as_slice()), MediaKind::Png)
        .unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().flatten().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].path().extension().and_then(|e| e.to_str()),
        Some("png")
    );
}

#[tokio::test]
async fn shared_store_serializes_concurrent_writers() {
    let _ = env_logger::builder().is_test(true).try_init();
    let base = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let shared = SharedStore::new(Store::new(base.path(), temp.path(), "Media"));

    let mut handles = Vec::new();
    for i in 0..8 {
        let shared = shared.clone();
        handles.push(tokio::spawn(async move {
            let name = format!("file_{}", i);
            shared
                .write(format!("payload {}", i).into_bytes(), Some(name.as_str()), None, "txt")
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    for i in 0..8 {
        let result = shared.read(&format!("file_{}.txt", i)).await.unwrap();
        assert_eq!(result.payload.as_bytes(), format!("payload {}", i).as_bytes());
    }
}

//! Resilience tests: missing, corrupted, truncated and mis-shaped files.

use regcred::{CredentialError, FileStore, LoadFailure};

fn assert_loading_error(result: regcred::Result<FileStore>) -> LoadFailure {
    match result {
        Err(CredentialError::ConfigLoading { source, .. }) => source,
        Err(other) => panic!("expected ConfigLoading, got {other:?}"),
        Ok(store) => panic!("expected failure, loaded {store:?}"),
    }
}

#[test]
fn resilience_nonexistent_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("definitely_does_not_exist.json");

    let source = assert_loading_error(FileStore::open(&path));
    assert!(matches!(source, LoadFailure::Io(_)));
}

#[test]
fn resilience_error_names_offending_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("missing-config.json");

    let err = FileStore::open(&path).unwrap_err();
    assert!(
        err.to_string().contains("missing-config.json"),
        "error should name the path, got: {err}"
    );
}

#[test]
fn resilience_directory_instead_of_file() {
    let tmp = tempfile::tempdir().unwrap();
    let source = assert_loading_error(FileStore::open(tmp.path()));
    assert!(matches!(source, LoadFailure::Io(_)));
}

#[test]
fn resilience_empty_file_detected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("empty.json");
    std::fs::write(&path, b"").unwrap();

    let source = assert_loading_error(FileStore::open(&path));
    assert!(matches!(source, LoadFailure::Parse(_)));
}

#[test]
fn resilience_truncated_file_detected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("truncated.json");
    let full = br#"{ "docker.io": { "username": "bob", "password": "hunter2" } }"#;
    std::fs::write(&path, &full[..full.len() / 2]).unwrap();

    let source = assert_loading_error(FileStore::open(&path));
    assert!(matches!(source, LoadFailure::Parse(_)));
}

#[test]
fn resilience_invalid_utf8_detected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("binary.json");
    std::fs::write(&path, [0xFF, 0xFE, 0x00, 0x7B]).unwrap();

    assert_loading_error(FileStore::open(&path));
}

#[test]
fn resilience_wrong_shapes_detected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");

    let shapes = [
        r#"null"#,
        r#"["docker.io"]"#,
        r#"{ "docker.io": null }"#,
        r#"{ "docker.io": { "password": "pw" } }"#,
        r#"{ "docker.io": { "username": "bob", "password": null } }"#,
        r#"{ "auths": { "docker.io": { "auth": "Ym9iOmh1bnRlcjI=" } } }"#,
    ];

    for shape in shapes {
        std::fs::write(&path, shape).unwrap();
        let source = assert_loading_error(FileStore::open(&path));
        assert!(
            matches!(source, LoadFailure::Parse(_)),
            "expected parse failure for {shape}"
        );
    }
}

#[test]
fn resilience_read_only_open_fails_the_same_way() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nope.json");

    let source = assert_loading_error(FileStore::open_read_only(&path));
    assert!(matches!(source, LoadFailure::Io(_)));
}

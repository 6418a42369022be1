mod common;

use common::{contacts, names, temp_file};
use rolodex::contacts::{
    spawn_fetch_worker, ContactStore, FetchError, FetchOutcome, FetchRequest, FileContactStore,
    SampleContactStore,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn file_store_reads_contacts() {
    let (_dir, path) = temp_file(
        "contacts.toml",
        r#"
[[contacts]]
id = "c-1"
name = "Ann"

[[contacts]]
name = "bob"
"#,
    );
    let store = FileContactStore::new(&path);
    let fetched = store.fetch_contacts().await.unwrap();

    assert_eq!(names(&fetched), vec!["Ann", "bob"]);
    assert_eq!(fetched[0].id.as_str(), "c-1");
    assert!(!fetched[1].id.as_str().is_empty());
}

#[tokio::test]
async fn file_store_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileContactStore::new(dir.path().join("absent.toml"));

    let err = store.fetch_contacts().await.unwrap_err();
    assert!(matches!(err, FetchError::Io { .. }));
}

#[tokio::test]
async fn file_store_malformed_file_is_parse_error() {
    let (_dir, path) = temp_file("contacts.toml", "[[contacts]]\nname = 42\n");
    let store = FileContactStore::new(&path);

    let err = store.fetch_contacts().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse { .. }));
    assert!(err.to_string().contains("contacts.toml"));
}

#[tokio::test]
async fn sample_store_fails_only_first_fetch() {
    let store = SampleContactStore::with_contacts(contacts(&["Ann"]), Duration::ZERO, true);

    assert!(matches!(
        store.fetch_contacts().await,
        Err(FetchError::Unavailable { .. })
    ));
    assert_eq!(names(&store.fetch_contacts().await.unwrap()), vec!["Ann"]);
}

#[tokio::test]
async fn worker_reports_outcome_with_request_generation() {
    let store: Arc<dyn ContactStore> = Arc::new(SampleContactStore::with_contacts(
        contacts(&["Ann", "Bob"]),
        Duration::ZERO,
        false,
    ));
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let requests = spawn_fetch_worker(&tokio::runtime::Handle::current(), store, move |outcome| {
        let _ = out_tx.send(outcome);
    });

    requests.send(FetchRequest { generation: 7 }).unwrap();
    let outcome = tokio::time::timeout(Duration::from_secs(5), out_rx.recv())
        .await
        .expect("worker timed out")
        .expect("worker dropped the callback");

    assert_eq!(outcome.generation, 7);
    assert_eq!(names(&outcome.result.unwrap()), vec!["Ann", "Bob"]);
}

#[tokio::test]
async fn worker_calls_store_once_per_request() {
    let store: Arc<dyn ContactStore> = Arc::new(SampleContactStore::with_contacts(
        contacts(&["Ann"]),
        Duration::ZERO,
        true,
    ));
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let requests = spawn_fetch_worker(&tokio::runtime::Handle::current(), store, move |outcome| {
        let _ = out_tx.send(outcome);
    });

    requests.send(FetchRequest { generation: 1 }).unwrap();
    let first = out_rx.recv().await.unwrap();
    requests.send(FetchRequest { generation: 2 }).unwrap();
    let second = out_rx.recv().await.unwrap();

    assert_eq!(first.generation, 1);
    assert!(first.result.is_err());
    assert_eq!(second.generation, 2);
    assert!(second.result.is_ok());
}

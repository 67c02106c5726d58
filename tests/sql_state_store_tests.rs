use std::sync::Arc;
use swift_storage_adapter::{
    AccountKeyProvisioner, InMemorySwiftBackend, KeyStore, SqlStateStore, StateStore,
    services::SIGNING_KEY_STATE_NAME,
};
use tempfile::TempDir;

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("state.db").display())
}

#[tokio::test]
async fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = database_url(&dir);

    {
        let store = SqlStateStore::connect(&url).await.unwrap();
        store.set("greeting", "hello").await.unwrap();
    }

    let reopened = SqlStateStore::connect(&url).await.unwrap();
    assert_eq!(
        reopened.get("greeting").await.unwrap().as_deref(),
        Some("hello")
    );
}

#[tokio::test]
async fn test_signing_key_is_reused_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let url = database_url(&dir);
    let backend = Arc::new(InMemorySwiftBackend::new());

    let first = {
        let store = Arc::new(SqlStateStore::connect(&url).await.unwrap());
        let key_store = KeyStore::new(store, AccountKeyProvisioner::new(backend.clone()));
        key_store.get_or_create_key().await.unwrap()
    };
    assert_eq!(backend.calls().fetch_account, 1);

    let store = Arc::new(SqlStateStore::connect(&url).await.unwrap());
    assert_eq!(
        store.get(SIGNING_KEY_STATE_NAME).await.unwrap().as_deref(),
        Some(first.expose())
    );

    let key_store = KeyStore::new(store, AccountKeyProvisioner::new(backend.clone()));
    let second = key_store.get_or_create_key().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(backend.calls().fetch_account, 1);
    assert_eq!(backend.calls().write_temp_url_key, 1);
}

#[tokio::test]
async fn test_invalidate_removes_persisted_key() {
    let dir = tempfile::tempdir().unwrap();
    let url = database_url(&dir);
    let backend = Arc::new(InMemorySwiftBackend::new());

    let store = Arc::new(SqlStateStore::connect(&url).await.unwrap());
    let key_store = KeyStore::new(store.clone(), AccountKeyProvisioner::new(backend.clone()));

    key_store.get_or_create_key().await.unwrap();
    assert!(key_store.invalidate().await.unwrap());
    assert!(!key_store.invalidate().await.unwrap());
    assert_eq!(store.get(SIGNING_KEY_STATE_NAME).await.unwrap(), None);

    key_store.get_or_create_key().await.unwrap();
    assert_eq!(backend.calls().fetch_account, 2);
    assert_eq!(backend.calls().write_temp_url_key, 1);
}

use fintrack_core::db::open_db_in_memory;
use fintrack_core::{
    AuthService, Identity, IdentityStore, KeyValueStore, SqliteKvStore, IDENTITY_KEY,
};

#[test]
fn save_then_load_returns_same_identity() {
    let conn = open_db_in_memory().unwrap();
    let store = IdentityStore::new(SqliteKvStore::try_new(&conn).unwrap());

    let identity = Identity::new("ana@example.com");
    store.save(&identity).unwrap();

    assert_eq!(store.load(), Some(identity));
}

#[test]
fn clear_then_load_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = IdentityStore::new(SqliteKvStore::try_new(&conn).unwrap());

    store.save(&Identity::new("ana@example.com")).unwrap();
    store.clear().unwrap();
    store.clear().unwrap();

    assert_eq!(store.load(), None);
}

#[test]
fn corrupt_record_reads_as_logged_out() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::try_new(&conn).unwrap();
    kv.set(IDENTITY_KEY, "{not json").unwrap();

    assert_eq!(IdentityStore::new(kv).load(), None);

    kv.set(IDENTITY_KEY, r#"{"name":"missing email"}"#).unwrap();
    assert_eq!(IdentityStore::new(kv).load(), None);
}

#[test]
fn persisted_shape_is_email_object() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::try_new(&conn).unwrap();
    IdentityStore::new(kv)
        .save(&Identity::new("ana@example.com"))
        .unwrap();

    let raw = kv.get(IDENTITY_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "ana@example.com" }));
}

#[test]
fn login_requires_both_fields_and_trims_email() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::try_new(&conn).unwrap();
    let mut auth = AuthService::load(kv);

    assert_eq!(auth.login("  ", "secret").unwrap(), None);
    assert_eq!(auth.login("ana@example.com", "   ").unwrap(), None);
    assert!(auth.current().is_none());
    assert_eq!(kv.get(IDENTITY_KEY).unwrap(), None);

    let identity = auth.login("  ana@example.com ", "secret").unwrap().unwrap();
    assert_eq!(identity.email, "ana@example.com");
    assert_eq!(auth.current(), Some(&identity));

    let raw = kv.get(IDENTITY_KEY).unwrap().unwrap();
    assert!(!raw.contains("secret"));
}

#[test]
fn login_survives_restart_and_logout_clears_it() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::try_new(&conn).unwrap();

    AuthService::load(kv)
        .login("ana@example.com", "pw")
        .unwrap();

    let mut restored = AuthService::load(kv);
    assert_eq!(
        restored.current().map(|identity| identity.email.as_str()),
        Some("ana@example.com")
    );

    restored.logout().unwrap();
    assert!(restored.current().is_none());
    assert!(AuthService::load(kv).current().is_none());
}

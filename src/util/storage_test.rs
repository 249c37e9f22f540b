use super::*;

fn user() -> User {
    User { id: "1".to_owned(), email: "a@b.com".to_owned(), ..User::default() }
}

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    storage.set("theme", "dark");
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    storage.remove("theme");
    assert_eq!(storage.get("theme"), None);
    storage.remove("theme");
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    other.set("user", "{}");
    assert_eq!(storage.keys(), vec!["user".to_owned()]);
}

#[test]
fn memory_storage_clear_removes_every_key() {
    let storage = MemoryStorage::new();
    storage.set("theme", "dark");
    storage.set(USER_KEY, "{}");
    storage.clear();
    assert!(storage.is_empty());
}

#[test]
fn local_storage_is_inert_outside_browser() {
    let storage = LocalStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
    storage.clear();
}

#[test]
fn write_identity_record_persists_id_and_email_only() {
    let storage = MemoryStorage::new();
    write_identity_record(&storage, Some(&user()));
    assert_eq!(storage.get(USER_KEY).as_deref(), Some(r#"{"id":"1","email":"a@b.com"}"#));
    assert_eq!(
        read_identity_record(&storage),
        Some(IdentityRecord { id: Some("1".to_owned()), email: Some("a@b.com".to_owned()) })
    );
}

#[test]
fn write_identity_record_without_user_persists_empty_object() {
    let storage = MemoryStorage::new();
    write_identity_record(&storage, None);
    assert_eq!(storage.get(USER_KEY).as_deref(), Some("{}"));
    assert_eq!(read_identity_record(&storage), Some(IdentityRecord::default()));
}

#[test]
fn read_identity_record_ignores_garbage() {
    let storage = MemoryStorage::new();
    assert_eq!(read_identity_record(&storage), None);
    storage.set(USER_KEY, "not json");
    assert_eq!(read_identity_record(&storage), None);
}

#[test]
fn remove_identity_record_leaves_other_keys() {
    let storage = MemoryStorage::new();
    storage.set("theme", "dark");
    write_identity_record(&storage, Some(&user()));
    remove_identity_record(&storage);
    assert_eq!(storage.keys(), vec!["theme".to_owned()]);
}

use common::types::{Product, User};
use serde_json::{json, Map, Value};
use service::{
    in_memory_fn_repository, Entity, InMemoryRepository, ProductPatch, Record, Repository,
    ServiceError, UserPatch,
};

fn user(id: &str, name: &str) -> User {
    User { id: id.into(), name: name.into() }
}

fn object(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        other => panic!("expected object, got {other}"),
    }
}

/// Entity whose merge rewrites the identifier, to exercise the store's guard.
#[derive(Debug, Clone, PartialEq)]
struct Renaming {
    id: String,
}

impl Entity for Renaming {
    type Patch = String;

    fn id(&self) -> &str { &self.id }

    fn merge(self, patch: String) -> Self { Renaming { id: patch } }
}

fn create_then_find_returns_same<R: Repository<User>>(mut repo: R) {
    let created = repo.create(user("1", "Putri"));
    assert_eq!(created, user("1", "Putri"));
    assert_eq!(repo.find_by_id("1"), Some(user("1", "Putri")));
}

fn absent_id_is_none_and_remove_false<R: Repository<User>>(mut repo: R) {
    assert_eq!(repo.find_by_id("nope"), None);
    assert!(!repo.remove("nope"));
    assert!(!repo.contains("nope"));
}

fn find_all_in_insertion_order<R: Repository<User>>(mut repo: R) {
    repo.create(user("1", "Putri"));
    repo.create(user("2", "Anggit"));
    assert_eq!(repo.find_all(), vec![user("1", "Putri"), user("2", "Anggit")]);
}

fn update_merges_and_keeps_id<R: Repository<User>>(mut repo: R) {
    repo.create(user("1", "Putri"));
    repo.create(user("2", "Anggit"));
    let updated = repo.update("2", UserPatch { name: Some("Anggit S.".into()) }).unwrap();
    assert_eq!(updated, user("2", "Anggit S."));
    assert_eq!(repo.find_by_id("2"), Some(user("2", "Anggit S.")));
    // position unchanged by update
    assert_eq!(repo.find_all(), vec![user("1", "Putri"), user("2", "Anggit S.")]);
}

fn update_with_empty_patch_is_identity<R: Repository<User>>(mut repo: R) {
    repo.create(user("1", "Putri"));
    assert_eq!(repo.update("1", UserPatch::default()).unwrap(), user("1", "Putri"));
}

fn update_missing_is_not_found<R: Repository<User>>(mut repo: R) {
    let err = repo.update("99", UserPatch { name: Some("x".into()) }).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(repo.is_empty());
}

fn remove_twice_reports_true_then_false<R: Repository<User>>(mut repo: R) {
    repo.create(user("1", "Putri"));
    assert!(repo.remove("1"));
    assert!(!repo.remove("1"));
    assert_eq!(repo.find_by_id("1"), None);
    assert!(repo.find_all().is_empty());
}

fn create_overwrites_existing_id<R: Repository<User>>(mut repo: R) {
    repo.create(user("1", "Putri"));
    repo.create(user("2", "Anggit"));
    repo.create(user("1", "Putri W."));
    assert_eq!(repo.len(), 2);
    assert_eq!(repo.find_all(), vec![user("1", "Putri W."), user("2", "Anggit")]);
}

fn create_unique_refuses_overwrite<R: Repository<User>>(mut repo: R) {
    repo.create_unique(user("1", "Putri")).unwrap();
    let err = repo.create_unique(user("1", "Other")).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(repo.find_by_id("1"), Some(user("1", "Putri")));
}

fn snapshot_is_not_affected_by_later_writes<R: Repository<User>>(mut repo: R) {
    repo.create(user("1", "Putri"));
    let snapshot = repo.find_all();
    repo.create(user("2", "Anggit"));
    repo.update("1", UserPatch { name: Some("changed".into()) }).unwrap();
    repo.remove("1");
    assert_eq!(snapshot, vec![user("1", "Putri")]);
}

fn len_counts_distinct_created_minus_removed<R: Repository<User>>(mut repo: R) {
    for i in 0..20 {
        repo.create(user(&i.to_string(), "n"));
    }
    // duplicates do not add
    for i in 0..5 {
        repo.create(user(&i.to_string(), "dup"));
    }
    let mut removed = 0;
    for i in (0..20).step_by(3) {
        if repo.remove(&i.to_string()) {
            removed += 1;
        }
    }
    assert_eq!(repo.len(), 20 - removed);
    assert_eq!(repo.find_all().len(), repo.len());
    let ids: Vec<String> = repo.find_all().into_iter().map(|u| u.id).collect();
    let expected: Vec<String> = (0..20).filter(|i| i % 3 != 0).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

fn recreate_after_remove_goes_last<R: Repository<User>>(mut repo: R) {
    repo.create(user("1", "Putri"));
    repo.create(user("2", "Anggit"));
    repo.remove("1");
    repo.create(user("1", "Putri"));
    assert_eq!(repo.find_all(), vec![user("2", "Anggit"), user("1", "Putri")]);
}

fn merge_changing_id_is_rejected<R: Repository<Renaming>>(mut repo: R) {
    repo.create(Renaming { id: "a".into() });
    let err = repo.update("a", "b".into()).unwrap_err();
    assert_eq!(err, ServiceError::IdentifierMismatch { expected: "a".into(), found: "b".into() });
    assert_eq!(repo.find_all(), vec![Renaming { id: "a".into() }]);
    assert!(!repo.contains("b"));
}

fn record_patch_overlays_fields<R: Repository<Record>>(mut repo: R) {
    repo.create(Record::new("1").with("name", "Soto").with("price", 1000));
    let merged = repo.update("1", object(json!({"price": 1500, "id": "2"}))).unwrap();
    assert_eq!(merged.id, "1");
    assert_eq!(merged.get("name"), Some(&json!("Soto")));
    assert_eq!(merged.get("price"), Some(&json!(1500)));
    assert!(repo.find_by_id("2").is_none());
}

fn record_created_with_id_field_keeps_real_id<R: Repository<Record>>(mut repo: R) {
    repo.create(Record::new("1").with("id", "2").with("name", "Soto"));
    let stored = repo.find_by_id("1").unwrap();
    let text = serde_json::to_string(&stored).unwrap();
    assert_eq!(text, r#"{"id":"1","name":"Soto"}"#);
    let back: Record = serde_json::from_str(&text).unwrap();
    assert_eq!(back.id, "1");
    assert!(repo.find_by_id("2").is_none());
}

fn len_tracks_live_entries<R: Repository<User>>(mut repo: R) {
    assert!(repo.is_empty());
    repo.create(user("1", "Putri"));
    repo.create(user("2", "Anggit"));
    repo.create(user("1", "Putri W."));
    assert_eq!(repo.len(), 2);
    repo.remove("2");
    assert_eq!(repo.len(), 1);
    assert!(!repo.is_empty());
}

macro_rules! contract_suite {
    ($modname:ident, $make:expr) => {
        mod $modname {
            use super::*;

            #[test]
            fn create_then_find() { create_then_find_returns_same($make); }
            #[test]
            fn absent_identifier() { absent_id_is_none_and_remove_false($make); }
            #[test]
            fn listing_order() { find_all_in_insertion_order($make); }
            #[test]
            fn partial_update() { update_merges_and_keeps_id($make); }
            #[test]
            fn empty_patch() { update_with_empty_patch_is_identity($make); }
            #[test]
            fn update_missing() { update_missing_is_not_found($make); }
            #[test]
            fn remove_twice() { remove_twice_reports_true_then_false($make); }
            #[test]
            fn overwrite() { create_overwrites_existing_id($make); }
            #[test]
            fn unique_create() { create_unique_refuses_overwrite($make); }
            #[test]
            fn snapshot() { snapshot_is_not_affected_by_later_writes($make); }
            #[test]
            fn counting() { len_counts_distinct_created_minus_removed($make); }
            #[test]
            fn recreate() { recreate_after_remove_goes_last($make); }
            #[test]
            fn identifier_guard() { merge_changing_id_is_rejected($make); }
            #[test]
            fn schemaless_records() { record_patch_overlays_fields($make); }
            #[test]
            fn record_identifier_not_shadowed() {
                record_created_with_id_field_keeps_real_id($make);
            }
            #[test]
            fn live_count() { len_tracks_live_entries($make); }
        }
    };
}

contract_suite!(owned_store, InMemoryRepository::new());
contract_suite!(closure_store, in_memory_fn_repository());

#[test]
fn stores_per_entity_kind_are_independent() {
    let mut users = InMemoryRepository::<User>::new();
    let mut products = in_memory_fn_repository::<Product>();

    users.create(user("1", "Putri"));
    users.create(user("2", "Anggit"));
    let soto = products.create(Product { id: "1".into(), name: "Soto".into(), price: 1000 });

    assert_eq!(users.len(), 2);
    assert_eq!(products.find_all(), vec![soto]);
    let cheaper = products
        .update("1", ProductPatch { price: Some(900), ..Default::default() })
        .unwrap();
    assert_eq!(cheaper.price, 900);
    assert_eq!(users.find_by_id("1"), Some(user("1", "Putri")));
}

#[test]
fn trait_objects_work_for_both_forms() {
    let mut stores: Vec<Box<dyn Repository<User>>> =
        vec![Box::new(InMemoryRepository::new()), Box::new(in_memory_fn_repository())];
    for store in stores.iter_mut() {
        store.create(user("1", "Putri"));
        assert!(store.contains("1"));
        assert!(store.remove("1"));
        assert!(store.is_empty());
    }
}

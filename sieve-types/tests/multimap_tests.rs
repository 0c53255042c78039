use pretty_assertions::assert_eq;
use sieve_types::{MultiValueMap, RawFilter, TypedFilter, TypedValue};

#[test]
fn add_appends_under_existing_key() {
    let mut map = MultiValueMap::new();
    map.add("a", 1);
    map.add("b", 2);
    map.add("a", 3);

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&[1, 3][..]));
    assert_eq!(map.get("b"), Some(&[2][..]));
}

#[test]
fn keys_keep_first_insertion_order() {
    let mut map = MultiValueMap::new();
    map.add("zeta", ());
    map.add("alpha", ());
    map.add("zeta", ());
    map.add("mid", ());

    let keys: Vec<&str> = map.keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn keys_are_case_sensitive() {
    let mut map = MultiValueMap::new();
    map.add("age", 1);
    map.add("AGE", 2);

    assert_eq!(map.len(), 2);
    assert!(map.contains_key("age"));
    assert!(map.contains_key("AGE"));
    assert!(!map.contains_key("Age"));
}

#[test]
fn add_all_creates_empty_entry() {
    let mut map: MultiValueMap<i32> = MultiValueMap::new();
    map.add_all("empty", Vec::new());

    assert!(map.contains_key("empty"));
    assert_eq!(map.get("empty"), Some(&[][..]));
}

#[test]
fn missing_key_returns_none() {
    let map: MultiValueMap<i32> = MultiValueMap::new();
    assert!(map.is_empty());
    assert_eq!(map.get("nope"), None);
}

#[test]
fn from_iterator_groups_pairs() {
    let map: RawFilter = [("name", "Ada"), ("age", "30"), ("name", "Grace")]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

    let entries: Vec<(&str, Vec<&str>)> = map
        .iter()
        .map(|(k, vs)| (k, vs.iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(
        entries,
        vec![("name", vec!["Ada", "Grace"]), ("age", vec!["30"])]
    );
}

#[test]
fn from_array_merges_duplicate_keys() {
    let map = MultiValueMap::from([("k", vec![1, 2]), ("j", vec![3]), ("k", vec![4])]);
    assert_eq!(map.get("k"), Some(&[1, 2, 4][..]));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["k", "j"]);
}

#[test]
fn into_iter_yields_owned_entries_in_order() {
    let map = MultiValueMap::from([("b", vec![1]), ("a", vec![2])]);
    let owned: Vec<(String, Vec<i32>)> = map.into_iter().collect();
    assert_eq!(owned, vec![("b".to_string(), vec![1]), ("a".to_string(), vec![2])]);
}

#[test]
fn typed_filter_serializes_as_ordered_map() {
    let mut filter = TypedFilter::new();
    filter.add("age", TypedValue::Int32(30));
    filter.add("name", TypedValue::Text("Ada".into()));
    filter.add("age", TypedValue::Int32(31));

    let json = serde_json::to_string(&filter).unwrap();
    assert_eq!(json, r#"{"age":[30,31],"name":["Ada"]}"#);
}

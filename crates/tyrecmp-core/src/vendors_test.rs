use super::*;

#[test]
fn registry_has_six_vendors_in_display_order() {
    let keys: Vec<&str> = list_vendors().iter().map(|v| v.key).collect();
    assert_eq!(
        keys,
        vec!["lastikpark", "mollaoglu", "haskar", "cakiroglu", "mutaflar", "lasmax"]
    );
}

#[test]
fn registry_keys_and_hosts_are_unique() {
    let keys: HashSet<&str> = list_vendors().iter().map(|v| v.key).collect();
    let hosts: HashSet<&str> = list_vendors().iter().map(|v| v.host).collect();
    assert_eq!(keys.len(), list_vendors().len());
    assert_eq!(hosts.len(), list_vendors().len());
}

#[test]
fn all_vendor_keys_matches_registry() {
    assert_eq!(all_vendor_keys().len(), 6);
    assert_eq!(all_vendor_keys()[0], "lastikpark");
}

#[test]
fn find_vendor_returns_known_site() {
    let site = find_vendor("haskar").expect("haskar is registered");
    assert_eq!(site.host, "b2b.haskar.com.tr");
}

#[test]
fn find_vendor_unknown_is_none() {
    assert!(find_vendor("nope").is_none());
}

#[test]
fn hosts_for_maps_selected_keys() {
    let hosts = hosts_for(["mollaoglu", "lasmax"]);
    assert_eq!(hosts.len(), 2);
    assert!(hosts.contains("bayi.mollaoglu.com.tr"));
    assert!(hosts.contains("www.lasmaxbayi.com"));
}

#[test]
fn hosts_for_ignores_unknown_keys() {
    let hosts = hosts_for(vec!["haskar".to_string(), "retired-vendor".to_string()]);
    assert_eq!(hosts.len(), 1);
    assert!(hosts.contains("b2b.haskar.com.tr"));
}

#[test]
fn hosts_for_empty_selection_is_empty() {
    let hosts = hosts_for(Vec::<String>::new());
    assert!(hosts.is_empty());
}

use super::*;

#[test]
fn leptos_is_known() {
    assert!(is_known("leptos"));
    assert!(!is_known("svelte"));
}

#[test]
fn instantiate_preserves_order_and_names() {
    let plugins = instantiate(&["leptos".to_owned()]).unwrap();
    let names: Vec<_> = plugins.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["leptos"]);
}

#[test]
fn instantiate_unknown_errors() {
    let Err(err) = instantiate(&["leptos".to_owned(), "react".to_owned()]) else {
        panic!("expected unknown plugin error");
    };
    assert_eq!(err.to_string(), "unknown plugin: react");
}

#[test]
fn leptos_routes_serve_bundle_from_site_pkg() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("target/site/pkg")).unwrap();
    let mut cfg = DevConfig::default();
    cfg.root = dir.path().to_path_buf();

    // Building the router must not panic for a single mount.
    let _router = LeptosPlugin.routes(&cfg);
}

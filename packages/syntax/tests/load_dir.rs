use reprgen_syntax::{load_rust_dir, DeclarationNode, SyntaxError};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn type_names(nodes: &[DeclarationNode]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(DeclarationNode::as_type)
        .map(|t| format!("{}::{}", t.namespace.join("::"), t.name))
        .collect()
}

#[test]
fn test_load_dir_maps_files_to_modules() {
    let dir = TempDir::new().unwrap();
    write(&dir, "lib.rs", "pub mod menu;\npub struct Root;");
    write(&dir, "menu/mod.rs", "pub mod drinks;\npub struct Menu;");
    write(&dir, "menu/drinks.rs", "pub struct Coffee { pub name: String }");
    write(&dir, "notes.txt", "not rust");

    let loaded = load_rust_dir(dir.path()).expect("Failed to load");

    assert_eq!(loaded.files, 3);
    assert!(loaded.warnings.is_empty());
    assert_eq!(
        type_names(&loaded.snapshot.declarations),
        vec!["::Root", "menu::drinks::Coffee", "menu::Menu"]
    );
}

#[test]
fn test_load_dir_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write(&dir, "b.rs", "pub struct B;");
    write(&dir, "a.rs", "pub struct A;");
    write(&dir, "c/d.rs", "pub struct D;");

    let first = load_rust_dir(dir.path()).unwrap();
    let second = load_rust_dir(dir.path()).unwrap();

    assert_eq!(first.snapshot, second.snapshot);
    assert_eq!(type_names(&first.snapshot.declarations), vec!["a::A", "b::B", "c::d::D"]);
}

#[test]
fn test_unparseable_file_is_a_warning() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.rs", "pub struct Good;");
    write(&dir, "broken.rs", "pub struct {");

    let loaded = load_rust_dir(dir.path()).expect("Broken files must not abort loading");

    assert_eq!(loaded.files, 2);
    assert_eq!(loaded.warnings.len(), 1);
    assert!(matches!(loaded.warnings[0], SyntaxError::Parse { .. }));
    assert_eq!(type_names(&loaded.snapshot.declarations), vec!["good::Good"]);
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = load_rust_dir(&dir.path().join("missing"));
    assert!(matches!(result, Err(SyntaxError::NotADirectory(_))));
}

fn reachable_types(nodes: &[DeclarationNode]) -> Vec<(String, bool)> {
    nodes
        .iter()
        .filter_map(DeclarationNode::as_type)
        .map(|t| (t.name.clone(), t.reachable))
        .collect()
}

#[test]
fn test_file_module_reachability() {
    let dir = TempDir::new().unwrap();
    write(&dir, "lib.rs", "pub mod menu;\nmod orders;\n#[cfg(test)]\nmod fixtures;\n");
    write(&dir, "menu/mod.rs", "pub mod drinks;\nmod secret;\n");
    write(&dir, "menu/drinks.rs", "pub struct Coffee { pub name: String }");
    write(&dir, "menu/secret.rs", "pub struct Recipe { pub step: String }");
    write(&dir, "orders.rs", "pub struct Order { pub id: u64 }");
    write(&dir, "fixtures.rs", "pub struct Fixture { pub id: u64 }");
    write(&dir, "orphan.rs", "pub struct Orphan { pub id: u64 }");

    let loaded = load_rust_dir(dir.path()).unwrap();

    assert_eq!(
        reachable_types(&loaded.snapshot.declarations),
        vec![
            ("Fixture".to_string(), false),
            ("Coffee".to_string(), true),
            ("Recipe".to_string(), false),
            ("Order".to_string(), true),
            ("Orphan".to_string(), false),
        ]
    );
}

/// Output directory tests - the files a build script actually includes
///
/// These tests validate that:
/// - Each fragment lands in `<id>.g.<ext>`
/// - The index lists the marker definition first, then fragments in order
/// - Unchanged files are not rewritten on a second run
/// - The builder scans a source tree end to end
use reprgen_generator::{configure, DirSink, GenerateOptions, Session, Target};
use reprgen_syntax::{MemberDeclaration, Snapshot, TypeDeclaration, Visibility};
use std::fs;
use tempfile::TempDir;

fn snapshot() -> Snapshot {
    let mut snapshot = Snapshot::new();
    snapshot.push(
        TypeDeclaration::new(["shop"], "Order")
            .with_marker("GenerateToString")
            .with_member(MemberDeclaration::property("id", Visibility::Public)),
    );
    snapshot.push(
        TypeDeclaration::new(["shop", "menu"], "Coffee")
            .with_marker("GenerateToStringAttribute")
            .with_member(MemberDeclaration::property("size", Visibility::Public))
            .with_member(MemberDeclaration::property("cost", Visibility::Internal)),
    );
    snapshot.push(TypeDeclaration::new(["shop"], "Plain"));
    snapshot
}

#[test]
fn test_fragments_written_per_destination() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions::default();

    let mut sink = DirSink::new(dir.path(), &options).unwrap();
    let report = Session::new(options).run(&snapshot(), &mut sink).unwrap();
    assert_eq!(report.emitted, 2);

    let order = fs::read_to_string(dir.path().join("shop.Order.g.rs")).unwrap();
    assert!(order.starts_with("// @generated by reprgen. Do not edit.\n"));
    assert!(order.contains("impl ::core::fmt::Display for crate::shop::Order {"));

    let coffee = fs::read_to_string(dir.path().join("shop.menu.Coffee.g.rs")).unwrap();
    assert!(coffee.contains("cost: Cannot show contents of property: it is internal"));

    assert!(dir.path().join("reprgen.GenerateToString.g.rs").exists());
    assert!(!dir.path().join("shop.Plain.g.rs").exists());
}

#[test]
fn test_index_lists_marker_definition_first() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions::default();

    let mut sink = DirSink::new(dir.path(), &options).unwrap();
    Session::new(options).run(&snapshot(), &mut sink).unwrap();

    let index = fs::read_to_string(sink.index_path()).unwrap();
    let lines: Vec<&str> = index.lines().collect();
    assert_eq!(
        lines,
        vec![
            "// @generated by reprgen. Do not edit.",
            "include!(\"reprgen.GenerateToString.g.rs\");",
            "include!(\"shop.Order.g.rs\");",
            "include!(\"shop.menu.Coffee.g.rs\");",
        ]
    );
}

#[test]
fn test_second_run_leaves_files_untouched() {
    let dir = TempDir::new().unwrap();

    let mut first = DirSink::new(dir.path(), &GenerateOptions::default()).unwrap();
    Session::default().run(&snapshot(), &mut first).unwrap();
    assert_eq!(first.unchanged(), 0);
    let before = fs::read_to_string(dir.path().join("shop.Order.g.rs")).unwrap();

    let mut second = DirSink::new(dir.path(), &GenerateOptions::sequential()).unwrap();
    Session::new(GenerateOptions::sequential())
        .run(&snapshot(), &mut second)
        .unwrap();
    assert_eq!(second.unchanged(), 3);
    assert_eq!(second.written().len(), 3);

    let after = fs::read_to_string(dir.path().join("shop.Order.g.rs")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_typescript_output_directory() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions::for_target(Target::TypeScript);

    let mut sink = DirSink::new(dir.path(), &options).unwrap();
    Session::new(options).run(&snapshot(), &mut sink).unwrap();

    let index = fs::read_to_string(dir.path().join("reprgen.ts")).unwrap();
    assert!(index.contains("/// <reference path=\"shop.Order.g.ts\" />"));

    let order = fs::read_to_string(dir.path().join("shop.Order.g.ts")).unwrap();
    assert!(order.contains("Order.prototype.toString"));
    assert!(order.contains("${this.id}"));
}

#[test]
fn test_builder_scans_source_tree() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    fs::create_dir_all(src.path().join("menu")).unwrap();
    fs::write(src.path().join("lib.rs"), "pub mod menu;\n").unwrap();
    fs::write(
        src.path().join("menu").join("mod.rs"),
        r#"
            use crate::GenerateToString;

            #[GenerateToString]
            pub struct Coffee {
                pub size: u32,
                pub(crate) cost: u32,
                secret: String,
            }

            pub struct Unmarked {
                pub name: String,
            }

            #[GenerateToString]
            struct Draft {
                pub name: String,
            }

            #[cfg(test)]
            mod tests {
                #[GenerateToString]
                pub struct Fixture {
                    pub id: u32,
                }
            }
        "#,
    )
    .unwrap();

    let report = configure()
        .src_dir(src.path())
        .out_dir(out.path())
        .emit_rerun_if_changed(false)
        .generate()
        .unwrap();

    assert_eq!(report.matched, 3);
    assert_eq!(report.emitted, 1);
    assert_eq!(report.skipped, 2);
    assert!(!out.path().join("menu.Draft.g.rs").exists());
    assert!(!out.path().join("menu.tests.Fixture.g.rs").exists());

    let coffee = fs::read_to_string(out.path().join("menu.Coffee.g.rs")).unwrap();
    assert!(coffee.contains("for crate::menu::Coffee {"));
    assert!(coffee.contains(
        "\"size:{size}; cost: Cannot show contents of property: it is internal\","
    ));
    assert!(!coffee.contains("secret"));

    let index = fs::read_to_string(out.path().join("reprgen.rs")).unwrap();
    assert!(index.contains("include!(\"menu.Coffee.g.rs\");"));
}

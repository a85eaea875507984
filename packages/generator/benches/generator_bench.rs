use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reprgen_generator::{GenerateOptions, MemorySink, Session, Target};
use reprgen_syntax::{
    parse_rust_source, DeclarationNode, MemberDeclaration, Snapshot, TypeDeclaration, Visibility,
};

fn wide_snapshot(types: usize) -> Snapshot {
    (0..types)
        .map(|i| {
            let mut decl = TypeDeclaration::new(["bench", "wide"], format!("Type{}", i));
            if i % 2 == 0 {
                decl = decl.with_marker("GenerateToString");
            }
            for m in 0..12 {
                let visibility = match m % 3 {
                    0 => Visibility::Public,
                    1 => Visibility::Internal,
                    _ => Visibility::Other,
                };
                decl = decl.with_member(MemberDeclaration::property(format!("field{}", m), visibility));
            }
            DeclarationNode::from(decl)
        })
        .collect()
}

fn session_parallel(c: &mut Criterion) {
    let snapshot = wide_snapshot(1_000);
    let session = Session::new(GenerateOptions::default());

    c.bench_function("session_parallel_1000", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            session.run(black_box(&snapshot), &mut sink)
        })
    });
}

fn session_sequential(c: &mut Criterion) {
    let snapshot = wide_snapshot(1_000);
    let session = Session::new(GenerateOptions::sequential());

    c.bench_function("session_sequential_1000", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            session.run(black_box(&snapshot), &mut sink)
        })
    });
}

fn session_typescript(c: &mut Criterion) {
    let snapshot = wide_snapshot(1_000);
    let session = Session::new(GenerateOptions::for_target(Target::TypeScript));

    c.bench_function("session_typescript_1000", |b| {
        b.iter(|| {
            let mut sink = MemorySink::new();
            session.run(black_box(&snapshot), &mut sink)
        })
    });
}

fn parse_and_generate(c: &mut Criterion) {
    let source = r#"
        #[GenerateToString]
        pub struct Order {
            pub id: u64,
            pub(crate) total: u32,
            note: String,
        }

        pub mod lines {
            #[GenerateToString]
            pub struct Line {
                pub sku: String,
                pub quantity: u32,
            }
        }

        pub fn helper() {}
    "#;

    c.bench_function("parse_and_generate", |b| {
        b.iter(|| {
            let nodes = parse_rust_source(black_box(source), &["shop".to_string()]).unwrap();
            let mut sink = MemorySink::new();
            Session::default().run(&nodes, &mut sink)
        })
    });
}

criterion_group!(
    benches,
    session_parallel,
    session_sequential,
    session_typescript,
    parse_and_generate
);
criterion_main!(benches);

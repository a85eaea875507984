//! # Reprgen Generator
//!
//! Finds type declarations carrying the `GenerateToString` marker and
//! synthesizes a companion fragment implementing the host language's string
//! conversion for each of them.
//!
//! ## Pipeline
//!
//! - **Filter**: type declarations with at least one marker ([`is_syntax_target`])
//! - **Match**: one marker is `GenerateToString` or `GenerateToStringAttribute` ([`semantic_target`])
//! - **Extract**: public properties are shown, internal ones redacted ([`extract_members`])
//! - **Synthesize**: render through a [`CodeGenerator`] ([`synthesize`])
//!
//! [`Session`] drives the pipeline over a [`DeclarationSource`] snapshot and
//! delivers the results to an [`OutputSink`].
//!
//! ## Example
//!
//! ```rust
//! use reprgen_generator::{GenerateOptions, MemorySink, Session};
//! use reprgen_syntax::{MemberDeclaration, Snapshot, TypeDeclaration, Visibility};
//!
//! let mut snapshot = Snapshot::new();
//! snapshot.push(
//!     TypeDeclaration::new(["shop"], "Order")
//!         .with_marker("GenerateToString")
//!         .with_member(MemberDeclaration::property("id", Visibility::Public)),
//! );
//!
//! let mut sink = MemorySink::new();
//! let report = Session::new(GenerateOptions::default())
//!     .run(&snapshot, &mut sink)
//!     .unwrap();
//!
//! assert_eq!(report.emitted, 1);
//! assert!(sink.get("shop.Order").unwrap().contains("\"id:{id}\""));
//! ```

pub mod builder;
pub mod codegen;
pub mod context;
pub mod error;
pub mod extract;
pub mod filter;
pub mod fragment;
pub mod matcher;
pub mod options;
pub mod session;
pub mod sink;
pub mod synth;

pub use builder::{configure, Builder};
pub use codegen::{CodeGenerator, RustGenerator, Target, TypeScriptGenerator};
pub use error::{GenerateError, GenerateResult};
pub use extract::{extract_members, ExtractedMember, MemberDisplay};
pub use filter::is_syntax_target;
pub use fragment::{DestinationId, GeneratedFragment, MarkerDefinitionFragment};
pub use matcher::{is_generation_marker, semantic_target, MARKER_ATTRIBUTE_NAME, MARKER_NAME};
pub use options::GenerateOptions;
pub use session::{Session, SessionReport};
pub use sink::{DirSink, MemorySink, OutputSink};
pub use synth::{synthesize, Representation, Segment};

// Re-export the declaration model for convenience
pub use reprgen_syntax::{DeclarationNode, DeclarationSource, Snapshot, TypeDeclaration};

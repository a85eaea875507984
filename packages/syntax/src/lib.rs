//! # Reprgen Syntax
//!
//! The declaration model consumed by the generation pipeline, plus the
//! front ends that produce it:
//!
//! - [`Snapshot`]: an owned, JSON-serializable list of declarations
//! - [`rust`]: lowers Rust source files (via `syn`) into declarations
//!
//! ```rust
//! use reprgen_syntax::{parse_rust_source, DeclarationNode};
//!
//! let nodes = parse_rust_source(
//!     "#[GenerateToString] pub struct Order { pub id: u32 }",
//!     &["shop".to_string()],
//! )
//! .unwrap();
//!
//! let DeclarationNode::Type(order) = &nodes[0] else { panic!() };
//! assert_eq!(order.qualified_name().as_deref(), Some("shop.Order"));
//! ```

pub mod ast;
pub mod error;
pub mod rust;
pub mod source;

pub use ast::{
    DeclarationNode, Marker, MemberDeclaration, MemberKind, OtherDeclaration, TypeDeclaration,
    Visibility,
};
pub use error::{SyntaxError, SyntaxResult};
pub use rust::{load_rust_dir, module_path_for, parse_rust_source, LoadedSource};
pub use source::{DeclarationSource, Snapshot};

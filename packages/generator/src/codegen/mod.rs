pub mod rust;
pub mod typescript;

use crate::synth::Representation;
use reprgen_syntax::TypeDeclaration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use rust::RustGenerator;
pub use typescript::TypeScriptGenerator;

/// First line of every generated file
pub const GENERATED_HEADER: &str = "// @generated by reprgen. Do not edit.";

/// Plugin trait for rendering fragments in a host language.
/// Implementations can target different languages (Rust, TypeScript, etc.)
pub trait CodeGenerator: Send + Sync {
    fn target(&self) -> Target;

    /// Extension of the files written by a directory sink
    fn file_extension(&self) -> &'static str;

    /// Extension declaration overriding the string conversion of `decl`.
    /// Returns `None` when the type cannot be extended in this language.
    fn render_fragment(
        &self,
        decl: &TypeDeclaration,
        repr: &Representation,
        header: bool,
    ) -> Option<String>;

    /// Declaration that makes the marker usable in host sources
    fn render_marker_definition(&self, header: bool) -> String;

    /// File pulling every generated file into the host build
    fn render_index(&self, file_names: &[String], header: bool) -> String;
}

/// Host language of the generated fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Rust,
    TypeScript,
}

impl Target {
    pub fn generator(&self) -> Box<dyn CodeGenerator> {
        match self {
            Target::Rust => Box::new(RustGenerator::new()),
            Target::TypeScript => Box::new(TypeScriptGenerator::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Rust => "rust",
            Target::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rust" | "rs" => Ok(Target::Rust),
            "typescript" | "ts" => Ok(Target::TypeScript),
            other => Err(format!(
                "Unknown target: {}. Use: rust or typescript",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_str() {
        assert_eq!("rust".parse::<Target>(), Ok(Target::Rust));
        assert_eq!("ts".parse::<Target>(), Ok(Target::TypeScript));
        assert!("csharp".parse::<Target>().is_err());
    }

    #[test]
    fn test_target_generator_matches() {
        for target in [Target::Rust, Target::TypeScript] {
            assert_eq!(target.generator().target(), target);
        }
    }

    #[test]
    fn test_target_serde_names() {
        assert_eq!(serde_json::to_string(&Target::TypeScript).unwrap(), "\"typescript\"");
        assert_eq!(serde_json::from_str::<Target>("\"rust\"").unwrap(), Target::Rust);
    }
}

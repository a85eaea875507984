use reprgen_syntax::TypeDeclaration;
use std::fmt;

/// Fixed destination of the marker definition fragment
pub const MARKER_DEFINITION_ID: &str = "reprgen.GenerateToString";

/// Key under which the output sink stores a fragment.
///
/// For a type this is `<namespace>.<typeName>`, dot-joined.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `None` for a type with no enclosing namespace
    pub fn for_type(decl: &TypeDeclaration) -> Option<Self> {
        decl.qualified_name().map(Self)
    }

    pub fn marker_definition() -> Self {
        Self::new(MARKER_DEFINITION_ID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name used when the fragment is written to disk
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.g.{}", self.0, extension)
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Synthesized companion source for one matched type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFragment {
    pub id: DestinationId,
    pub body: String,
}

/// Declaration of the marker itself, emitted once per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDefinitionFragment {
    pub id: DestinationId,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_for_nested_namespace() {
        let decl = TypeDeclaration::new(["shop", "menu"], "Coffee");
        let id = DestinationId::for_type(&decl).unwrap();

        assert_eq!(id.as_str(), "shop.menu.Coffee");
        assert_eq!(id.file_name("rs"), "shop.menu.Coffee.g.rs");
    }

    #[test]
    fn test_no_destination_without_namespace() {
        let decl = TypeDeclaration::new(Vec::<String>::new(), "Coffee");
        assert!(DestinationId::for_type(&decl).is_none());
    }

    #[test]
    fn test_marker_definition_id_is_fixed() {
        assert_eq!(
            DestinationId::marker_definition().to_string(),
            "reprgen.GenerateToString"
        );
    }
}

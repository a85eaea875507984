use reprgen_syntax::{DeclarationNode, Marker, TypeDeclaration};

/// Short spelling of the generation marker
pub const MARKER_NAME: &str = "GenerateToString";

/// Long spelling of the generation marker
pub const MARKER_ATTRIBUTE_NAME: &str = "GenerateToStringAttribute";

/// Exact, case-sensitive comparison against both accepted spellings
pub fn is_generation_marker(name: &str) -> bool {
    name == MARKER_NAME || name == MARKER_ATTRIBUTE_NAME
}

/// First marker, in declaration order, that names the generation marker
pub fn find_generation_marker(decl: &TypeDeclaration) -> Option<&Marker> {
    decl.markers.iter().find(|marker| is_generation_marker(&marker.name))
}

/// Confirm a filtered candidate carries the generation marker
pub fn semantic_target(node: &DeclarationNode) -> Option<&TypeDeclaration> {
    let decl = node.as_type()?;
    find_generation_marker(decl).map(|_| decl)
}

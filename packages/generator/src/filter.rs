use reprgen_syntax::DeclarationNode;

/// Structural pre-check run on every node: a type declaration carrying at
/// least one marker. No names are inspected here.
pub fn is_syntax_target(node: &DeclarationNode) -> bool {
    matches!(node, DeclarationNode::Type(decl) if !decl.markers.is_empty())
}

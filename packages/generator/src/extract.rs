use reprgen_syntax::{MemberKind, TypeDeclaration, Visibility};

/// How an extracted member shows up in the representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberDisplay {
    /// Value is read at call time
    Visible,
    /// Name is listed, value is withheld
    Redacted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedMember<'a> {
    pub name: &'a str,
    pub display: MemberDisplay,
}

/// Property-like members that take part in the representation, in
/// declaration order. Public members are visible, internal ones redacted,
/// everything else is dropped. Duplicate names are kept as-is.
pub fn extract_members(decl: &TypeDeclaration) -> Vec<ExtractedMember<'_>> {
    decl.members
        .iter()
        .filter(|member| member.kind == MemberKind::Property)
        .filter_map(|member| {
            let display = match member.visibility {
                Visibility::Public => MemberDisplay::Visible,
                Visibility::Internal => MemberDisplay::Redacted,
                Visibility::Other => return None,
            };
            Some(ExtractedMember {
                name: &member.name,
                display,
            })
        })
        .collect()
}

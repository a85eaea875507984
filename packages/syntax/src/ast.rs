use serde::{Deserialize, Serialize};

/// A top-level declaration as seen by the generation pipeline.
///
/// Only [`DeclarationNode::Type`] nodes can ever produce output; everything
/// else is carried through so the pipeline sees the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum DeclarationNode {
    Type(TypeDeclaration),
    Other(OtherDeclaration),
}

impl DeclarationNode {
    pub fn as_type(&self) -> Option<&TypeDeclaration> {
        match self {
            DeclarationNode::Type(decl) => Some(decl),
            DeclarationNode::Other(_) => None,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        match self {
            DeclarationNode::Type(decl) => &decl.markers,
            DeclarationNode::Other(decl) => &decl.markers,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            DeclarationNode::Type(decl) => Some(&decl.name),
            DeclarationNode::Other(decl) => decl.name.as_deref(),
        }
    }
}

impl From<TypeDeclaration> for DeclarationNode {
    fn from(decl: TypeDeclaration) -> Self {
        DeclarationNode::Type(decl)
    }
}

impl From<OtherDeclaration> for DeclarationNode {
    fn from(decl: OtherDeclaration) -> Self {
        DeclarationNode::Other(decl)
    }
}

/// Type declaration (a `struct` in Rust sources)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclaration {
    /// Enclosing namespace, outermost first. Empty at the top level.
    #[serde(default)]
    pub namespace: Vec<String>,
    pub name: String,
    /// Generic parameter names in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDeclaration>,
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Whether the type can be named by its full path from the root of its
    /// compilation unit. Private, cfg-gated and undeclared modules make it
    /// unreachable.
    #[serde(default = "reachable_default", skip_serializing_if = "is_reachable")]
    pub reachable: bool,
}

fn reachable_default() -> bool {
    true
}

fn is_reachable(reachable: &bool) -> bool {
    *reachable
}

impl TypeDeclaration {
    pub fn new<I, S>(namespace: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespace: namespace.into_iter().map(Into::into).collect(),
            name: name.into(),
            generics: Vec::new(),
            members: Vec::new(),
            markers: Vec::new(),
            reachable: true,
        }
    }

    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }

    pub fn with_member(mut self, member: MemberDeclaration) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_marker(mut self, name: impl Into<String>) -> Self {
        self.markers.push(Marker::new(name));
        self
    }

    pub fn with_generic(mut self, name: impl Into<String>) -> Self {
        self.generics.push(name.into());
        self
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }

    pub fn is_generic(&self) -> bool {
        !self.generics.is_empty()
    }

    /// `<namespace>.<name>`, or `None` when the type has no enclosing namespace
    pub fn qualified_name(&self) -> Option<String> {
        if !self.has_namespace() {
            return None;
        }
        Some(format!("{}.{}", self.namespace.join("."), self.name))
    }
}

/// Any declaration that is not a type declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherDeclaration {
    /// Free-form kind label (`enum`, `fn`, `impl`, ...)
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Vec<String>,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl OtherDeclaration {
    pub fn new(kind: impl Into<String>, name: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            name,
            namespace: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, name: impl Into<String>) -> Self {
        self.markers.push(Marker::new(name));
        self
    }
}

/// Annotation attached to a declaration, identified by name only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker {
    pub name: String,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    /// Crate-wide visibility (`pub(crate)`)
    Internal,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Named member exposing a single readable value
    Property,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDeclaration {
    pub name: String,
    pub visibility: Visibility,
    pub kind: MemberKind,
}

impl MemberDeclaration {
    pub fn new(name: impl Into<String>, visibility: Visibility, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            visibility,
            kind,
        }
    }

    pub fn property(name: impl Into<String>, visibility: Visibility) -> Self {
        Self::new(name, visibility, MemberKind::Property)
    }

    pub fn other(name: impl Into<String>, visibility: Visibility) -> Self {
        Self::new(name, visibility, MemberKind::Other)
    }

    pub fn is_property(&self) -> bool {
        self.kind == MemberKind::Property
    }
}

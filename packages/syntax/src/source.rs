use crate::ast::DeclarationNode;
use crate::error::{SyntaxError, SyntaxResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Order-preserving view over one immutable set of declarations.
///
/// Implementations must return the same slice for every call made during a
/// generation session.
pub trait DeclarationSource {
    fn declarations(&self) -> &[DeclarationNode];
}

impl DeclarationSource for [DeclarationNode] {
    fn declarations(&self) -> &[DeclarationNode] {
        self
    }
}

impl DeclarationSource for Vec<DeclarationNode> {
    fn declarations(&self) -> &[DeclarationNode] {
        self
    }
}

/// Owned declaration snapshot, serializable as JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub declarations: Vec<DeclarationNode>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<DeclarationNode>) {
        self.declarations.push(node.into());
    }

    pub fn extend<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = DeclarationNode>,
    {
        self.declarations.extend(nodes);
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn from_json(json: &str) -> SyntaxResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> SyntaxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> SyntaxResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SyntaxError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> SyntaxResult<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| SyntaxError::io(path, e))
    }
}

impl DeclarationSource for Snapshot {
    fn declarations(&self) -> &[DeclarationNode] {
        &self.declarations
    }
}

impl FromIterator<DeclarationNode> for Snapshot {
    fn from_iter<T: IntoIterator<Item = DeclarationNode>>(iter: T) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}

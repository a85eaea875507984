use crate::codegen::CodeGenerator;
use crate::extract::{extract_members, ExtractedMember, MemberDisplay};
use crate::fragment::{DestinationId, GeneratedFragment};
use crate::options::GenerateOptions;
use reprgen_syntax::TypeDeclaration;
use tracing::debug;

/// Text rendered in place of an internal member's value
pub const REDACTED_NOTICE: &str = ": Cannot show contents of property: it is internal";

/// Placed between successive entries, never before the first or after the last
pub const SEPARATOR: &str = "; ";

/// Piece of the representation string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text
    Literal(String),
    /// Live value of the named member, read when the method runs
    Value(String),
}

/// Target-neutral form of the generated string-conversion body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Representation {
    segments: Vec<Segment>,
}

impl Representation {
    pub fn from_members(members: &[ExtractedMember<'_>]) -> Self {
        let mut repr = Self::default();

        for (index, member) in members.iter().enumerate() {
            if index > 0 {
                repr.push_literal(SEPARATOR);
            }

            match member.display {
                MemberDisplay::Visible => {
                    repr.push_literal(&format!("{}:", member.name));
                    repr.segments.push(Segment::Value(member.name.to_string()));
                }
                MemberDisplay::Redacted => {
                    repr.push_literal(&format!("{}{}", member.name, REDACTED_NOTICE));
                }
            }
        }

        repr
    }

    fn push_literal(&mut self, text: &str) {
        if let Some(Segment::Literal(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Literal(text.to_string()));
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Member names read at call time, in order, duplicates included
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Value(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Placeholder form of the body, e.g. `A:{A}; B: Cannot show ...; C:{C}`
    pub fn template(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.clone(),
                Segment::Value(name) => format!("{{{}}}", name),
            })
            .collect()
    }
}

/// Build the companion fragment for a matched type.
///
/// Types without an enclosing namespace, and types the generator cannot
/// extend, produce nothing.
pub fn synthesize(
    decl: &TypeDeclaration,
    generator: &dyn CodeGenerator,
    options: &GenerateOptions,
) -> Option<GeneratedFragment> {
    let Some(id) = DestinationId::for_type(decl) else {
        debug!("Skipping {}: no enclosing namespace", decl.name);
        return None;
    };

    let members = extract_members(decl);
    let repr = Representation::from_members(&members);

    let Some(body) = generator.render_fragment(decl, &repr, options.header) else {
        debug!("Skipping {}: not supported by {} target", id, generator.target());
        return None;
    };

    Some(GeneratedFragment { id, body })
}

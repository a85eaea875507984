use crate::codegen::{CodeGenerator, Target, GENERATED_HEADER};
use crate::context::CodeBuffer;
use crate::matcher::{MARKER_ATTRIBUTE_NAME, MARKER_NAME};
use crate::synth::{Representation, Segment};
use reprgen_syntax::TypeDeclaration;
use std::collections::BTreeSet;

/// Crate re-exported by the marker definition
pub const MACROS_CRATE: &str = "reprgen_macros";

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Rust code generator.
///
/// Each fragment is a standalone `impl ::core::fmt::Display` block addressed
/// through the type's `crate::` path, so fragments can be included anywhere in
/// the crate.
pub struct RustGenerator {
    _config: (),
}

impl RustGenerator {
    pub fn new() -> Self {
        Self { _config: () }
    }

    /// `crate::a::b::Name`, with keyword segments escaped
    pub fn type_path(&self, decl: &TypeDeclaration) -> String {
        let mut path = vec!["crate".to_string()];
        path.extend(decl.namespace.iter().map(|segment| ident(segment)));
        path.push(ident(&decl.name));
        path.join("::")
    }

    /// Format string for `write!`, with one named argument per value
    pub fn format_string(&self, repr: &Representation) -> String {
        let arguments = format_arguments(repr);
        repr.segments()
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.replace('{', "{{").replace('}', "}}"),
                Segment::Value(name) => format!("{{{}}}", argument_for(&arguments, name)),
            })
            .collect()
    }
}

impl Default for RustGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RustGenerator {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn render_fragment(
        &self,
        decl: &TypeDeclaration,
        repr: &Representation,
        header: bool,
    ) -> Option<String> {
        // An impl for a generic type would need bounds on every parameter
        if decl.is_generic() {
            return None;
        }
        // The index is included at the crate root, which must be able to name the type
        if !decl.reachable {
            return None;
        }

        let arguments = format_arguments(repr);

        let mut ctx = CodeBuffer::new();
        if header {
            ctx.add_line(GENERATED_HEADER);
        }

        ctx.add_line(&format!(
            "impl ::core::fmt::Display for {} {{",
            self.type_path(decl)
        ));
        ctx.indent();
        ctx.add_line("fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {");
        ctx.indent();

        if arguments.is_empty() {
            ctx.add_line(&format!("f.write_str({:?})", repr.template()));
        } else {
            ctx.add_line("::core::write!(");
            ctx.indent();
            ctx.add_line("f,");
            ctx.add_line(&format!("{:?},", self.format_string(repr)));
            for (name, argument) in &arguments {
                ctx.add_line(&format!("{} = self.{},", argument, ident(name)));
            }
            ctx.dedent();
            ctx.add_line(")");
        }

        ctx.dedent();
        ctx.add_line("}");
        ctx.dedent();
        ctx.add_line("}");

        Some(ctx.into_output())
    }

    fn render_marker_definition(&self, header: bool) -> String {
        let mut ctx = CodeBuffer::new();
        if header {
            ctx.add_line(GENERATED_HEADER);
        }
        ctx.add_line("#[allow(unused_imports)]");
        ctx.add_line(&format!(
            "pub use ::{}::{{{}, {}}};",
            MACROS_CRATE, MARKER_NAME, MARKER_ATTRIBUTE_NAME
        ));
        ctx.into_output()
    }

    fn render_index(&self, file_names: &[String], header: bool) -> String {
        let mut ctx = CodeBuffer::new();
        if header {
            ctx.add_line(GENERATED_HEADER);
        }
        for file_name in file_names {
            ctx.add_line(&format!("include!({:?});", file_name));
        }
        ctx.into_output()
    }
}

fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

fn ident(name: &str) -> String {
    if is_keyword(name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// One named `write!` argument per distinct member, in first-use order.
///
/// Raw identifiers are not allowed as argument names, so keywords get a `_`
/// suffix, repeated until it clashes with no member and no other argument.
fn format_arguments(repr: &Representation) -> Vec<(&str, String)> {
    let members: BTreeSet<&str> = repr.values().collect();
    let mut arguments: Vec<(&str, String)> = Vec::new();

    for name in repr.values() {
        if arguments.iter().any(|(member, _)| *member == name) {
            continue;
        }

        let mut argument = name.to_string();
        if is_keyword(name) {
            argument.push('_');
            while members.contains(argument.as_str())
                || arguments.iter().any(|(_, taken)| *taken == argument)
            {
                argument.push('_');
            }
        }
        arguments.push((name, argument));
    }

    arguments
}

fn argument_for<'a>(arguments: &'a [(&'a str, String)], name: &'a str) -> &'a str {
    arguments
        .iter()
        .find(|(member, _)| *member == name)
        .map(|(_, argument)| argument.as_str())
        .unwrap_or(name)
}

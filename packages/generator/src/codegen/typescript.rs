use crate::codegen::{CodeGenerator, Target, GENERATED_HEADER};
use crate::context::CodeBuffer;
use crate::matcher::{MARKER_ATTRIBUTE_NAME, MARKER_NAME};
use crate::synth::{Representation, Segment};
use reprgen_syntax::TypeDeclaration;

/// TypeScript code generator.
///
/// Fragments reopen the type's namespace and replace `toString` on the
/// prototype; files are tied together with triple-slash references.
pub struct TypeScriptGenerator {
    _config: (),
}

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self { _config: () }
    }

    /// Template literal evaluating the representation against `this`
    pub fn template_literal(&self, repr: &Representation) -> String {
        if repr.is_empty() {
            return "\"\"".to_string();
        }

        let body: String = repr
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => escape_template(text),
                Segment::Value(name) => format!("${{this.{}}}", name),
            })
            .collect();

        format!("`{}`", body)
    }

    fn this_type(&self, decl: &TypeDeclaration) -> String {
        if decl.generics.is_empty() {
            decl.name.clone()
        } else {
            let params = vec!["unknown"; decl.generics.len()];
            format!("{}<{}>", decl.name, params.join(", "))
        }
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn target(&self) -> Target {
        Target::TypeScript
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render_fragment(
        &self,
        decl: &TypeDeclaration,
        repr: &Representation,
        header: bool,
    ) -> Option<String> {
        let mut ctx = CodeBuffer::new();
        if header {
            ctx.add_line(GENERATED_HEADER);
        }

        ctx.add_line(&format!("namespace {} {{", decl.namespace.join(".")));
        ctx.indent();
        ctx.add_line(&format!(
            "{}.prototype.toString = function (this: {}): string {{",
            decl.name,
            self.this_type(decl)
        ));
        ctx.indent();
        ctx.add_line(&format!("return {};", self.template_literal(repr)));
        ctx.dedent();
        ctx.add_line("};");
        ctx.dedent();
        ctx.add_line("}");

        Some(ctx.into_output())
    }

    fn render_marker_definition(&self, header: bool) -> String {
        let mut ctx = CodeBuffer::new();
        if header {
            ctx.add_line(GENERATED_HEADER);
        }
        ctx.add_line(&format!(
            "function {}<T extends Function>(target: T): T {{",
            MARKER_NAME
        ));
        ctx.indent();
        ctx.add_line("return target;");
        ctx.dedent();
        ctx.add_line("}");
        ctx.add_line(&format!(
            "const {} = {};",
            MARKER_ATTRIBUTE_NAME, MARKER_NAME
        ));
        ctx.into_output()
    }

    fn render_index(&self, file_names: &[String], header: bool) -> String {
        let mut ctx = CodeBuffer::new();
        if header {
            ctx.add_line(GENERATED_HEADER);
        }
        for file_name in file_names {
            ctx.add_line(&format!("/// <reference path=\"{}\" />", file_name));
        }
        ctx.into_output()
    }
}

fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

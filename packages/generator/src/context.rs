/// Text buffer with indentation tracking, shared by the code generators
pub struct CodeBuffer {
    buffer: String,
    indent_level: usize,
    indent_unit: &'static str,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::with_indent("    ")
    }

    pub fn with_indent(indent_unit: &'static str) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_unit,
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_unit);
        }
        self.buffer.push_str(text);
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

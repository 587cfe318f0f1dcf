//! Indentation-aware text output.
//!
//! Nesting is expressed with closures: [`SourceWriter::block`] opens a brace,
//! runs the body one level deeper and closes the brace when the body returns,
//! whatever it returns. Callers never touch the indent level directly, so an
//! early `?` inside a body cannot leave the writer unbalanced.

pub struct SourceWriter {
    output: String,
    indent_unit: String,
    indent_level: usize,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new(indent_width: usize) -> Self {
        SourceWriter {
            output: String::with_capacity(4096),
            indent_unit: " ".repeat(indent_width),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Write text, indenting first if this starts a new line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write text followed by a newline.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.write_line();
    }

    /// Emit an empty line, collapsing runs of them.
    pub fn blank_line(&mut self) {
        if !self.at_line_start {
            self.write_line();
        }
        if !self.output.is_empty() && !self.output.ends_with("\n\n") {
            self.write_line();
        }
    }

    /// Run `body` one indentation level deeper.
    pub fn indented<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        if !self.at_line_start {
            self.write_line();
        }
        self.indent_level += 1;
        let result = body(self);
        if !self.at_line_start {
            self.write_line();
        }
        self.indent_level -= 1;
        result
    }

    /// `header {`, the indented body, then `}` on its own line.
    pub fn block<R>(&mut self, header: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        self.write(header);
        self.write(" {");
        self.write_line();
        let result = self.indented(body);
        self.line("}");
        result
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn finish(mut self) -> String {
        if !self.at_line_start {
            self.write_line();
        }
        self.output
    }
}

#[cfg(test)]
#[path = "../tests/source_writer.rs"]
mod tests;

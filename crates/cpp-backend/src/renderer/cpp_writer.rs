// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Simple line-based writer for generating C++ code with proper indentation.

use std::fmt::Write;

/// One indentation level: four spaces per brace nesting level.
const INDENT: &str = "    ";

/// Writer context for generating C++ code.
/// Tracks indentation and handles line-based output.
pub struct CppWriter<W: Write> {
    out: W,
    indent: usize,
    at_line_start: bool,
}

impl<W: Write> CppWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            indent: 0,
            at_line_start: true,
        }
    }

    /// Write a string, handling indentation at line starts.
    ///
    /// Pending indentation is flushed before every character, newlines
    /// included, so an empty line inside a braced block still carries its
    /// indentation (an empty body renders as one line of spaces).
    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            if self.at_line_start {
                for _ in 0..self.indent {
                    self.out.write_str(INDENT).unwrap();
                }
                self.at_line_start = false;
            }
            if c == '\n' {
                writeln!(self.out).unwrap();
                self.at_line_start = true;
            } else {
                write!(self.out, "{}", c).unwrap();
            }
        }
    }

    /// Write an empty line (just a newline).
    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Write a braced block: `{`, the body indented one level (every line,
    /// including an empty body's single line), then `}` back at the current
    /// level. Emits no trailing newline after the closing brace.
    pub fn braced(&mut self, body: &str) {
        self.write("{");
        self.indent += 1;
        self.write("\n");
        self.write(body);
        self.write("\n");
        self.indent -= 1;
        self.write("}");
    }

    /// Write items with a separator, using a custom render function for each
    /// item. Example: `w.sep_with(", ", &items, |w, item| w.write(item))`
    pub fn sep_with<I, T, F>(&mut self, separator: &str, items: I, mut render: F)
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        let mut first = true;
        for item in items {
            if !first {
                self.write(separator);
            }
            first = false;
            render(self, item);
        }
    }

    /// Get the underlying writer (consumes self).
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render to a string.
pub fn render_to_string<F>(f: F) -> String
where
    F: FnOnce(&mut CppWriter<String>),
{
    let mut writer = CppWriter::new(String::new());
    f(&mut writer);
    writer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braced_indents_every_body_line() {
        let out = render_to_string(|w| w.braced("a;\nb;"));
        assert_eq!(out, "{\n    a;\n    b;\n}");
    }

    #[test]
    fn braced_empty_body_keeps_its_indented_line() {
        let out = render_to_string(|w| w.braced(""));
        assert_eq!(out, "{\n    \n}");
    }

    #[test]
    fn nested_braced_blocks_accumulate_indentation() {
        let inner = render_to_string(|w| w.braced("x;"));
        let out = render_to_string(|w| w.braced(&inner));
        assert_eq!(out, "{\n    {\n        x;\n    }\n}");
    }

    #[test]
    fn sep_with_joins_without_trailing_separator() {
        let out = render_to_string(|w| {
            w.sep_with(", ", ["a", "b", "c"], |w, item| w.write(item));
        });
        assert_eq!(out, "a, b, c");
    }
}

//! Output buffer for generated declaration text
//!
//! One `RenderBuffer` exists per output file. It owns the accumulated text
//! and the current indentation depth; every block must be closed at the
//! depth it was opened.

/// One indentation level
const INDENT: &str = "    ";

/// Accumulating text output with indentation bookkeeping
#[derive(Debug, Default)]
pub struct RenderBuffer {
    out: String,
    depth: usize,
}

impl RenderBuffer {
    /// Create an empty buffer at depth zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line at the current indentation depth
    pub fn push_line(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    /// Append an empty line
    pub fn blank_line(&mut self) {
        self.out.push('\n');
    }

    /// Increase the indentation depth by one level
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease the indentation depth by one level
    pub fn dedent(&mut self) {
        debug_assert!(self.depth > 0, "dedent below depth zero");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consume the buffer and return the accumulated text
    pub fn into_string(self) -> String {
        self.out
    }
}

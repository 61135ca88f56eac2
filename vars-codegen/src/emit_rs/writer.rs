/// Line-oriented string builder for emitting table arms, plus Rust string
/// literal helpers.
pub struct ArmWriter {
    buf: String,
    indent: String,
    eol: String,
}

impl Default for ArmWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArmWriter {
    pub fn new() -> Self {
        Self::with_indent("")
    }

    /// Every line is prefixed with `indent`.
    pub fn with_indent(indent: &str) -> Self {
        Self::with_layout(indent, "\n")
    }

    /// Every line is prefixed with `indent` and terminated with `eol`.
    pub fn with_layout(indent: &str, eol: &str) -> Self {
        Self {
            buf: String::new(),
            indent: indent.to_string(),
            eol: eol.to_string(),
        }
    }

    /// Write one terminated line.
    pub fn line(&mut self, text: &str) {
        self.buf.push_str(&self.indent);
        self.buf.push_str(text);
        self.buf.push_str(&self.eol);
    }

    pub fn lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for l in lines {
            self.line(l);
        }
    }

    /// Consume and return the built string.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Escape a string for embedding in a Rust double-quoted string literal.
pub fn escape_rs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// `"a", "b"` for the inside of a `vec![..]`.
///
/// An empty list still renders one empty literal (`""`), the shape existing
/// generated tables use for keywords without a fixed value set.
pub fn quoted_list<S: AsRef<str>>(values: &[S]) -> String {
    let joined = values
        .iter()
        .map(|v| escape_rs(v.as_ref()))
        .collect::<Vec<_>>()
        .join("\", \"");
    format!("\"{joined}\"")
}

/// Splice generated arms into a Rust template between marker comments:
///
/// ```text
///     // automated input start taxon
///     ...replaced...
///     // automated input end taxon
/// ```
use crate::emit_rs::ArmWriter;

const START_MARKER: &str = "// automated input start";
const END_MARKER: &str = "// automated input end";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    #[error("template has no '{}' marker", marker(START_MARKER, .0))]
    MissingStart(String),
    #[error("template has no '{}' marker", marker(END_MARKER, .0))]
    MissingEnd(String),
    #[error("'{}' appears before its start marker", marker(END_MARKER, .0))]
    EndBeforeStart(String),
}

fn marker(prefix: &str, index: &str) -> String {
    if index.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix} {index}")
    }
}

/// Position of the first line whose trimmed text is exactly `wanted`.
fn find_marker(lines: &[&str], wanted: &str) -> Option<usize> {
    lines.iter().position(|l| l.trim() == wanted)
}

/// Replace the lines between the start and end markers for `index` with
/// `arms`, indented and terminated like the start marker line. Everything
/// else, including the markers, is kept byte for byte.
pub fn splice<S: AsRef<str>>(template: &str, index: &str, arms: &[S]) -> Result<String, SpliceError> {
    let lines: Vec<&str> = template.split_inclusive('\n').collect();
    let end_marker = marker(END_MARKER, index);
    let start = find_marker(&lines, &marker(START_MARKER, index))
        .ok_or_else(|| SpliceError::MissingStart(index.to_string()))?;
    let end = match find_marker(&lines[start + 1..], &end_marker) {
        Some(offset) => start + 1 + offset,
        None if find_marker(&lines[..start], &end_marker).is_some() => {
            return Err(SpliceError::EndBeforeStart(index.to_string()))
        }
        None => return Err(SpliceError::MissingEnd(index.to_string())),
    };

    let start_line = lines[start];
    let indent = &start_line[..start_line.len() - start_line.trim_start().len()];
    let eol = if start_line.ends_with("\r\n") { "\r\n" } else { "\n" };

    let mut body = ArmWriter::with_layout(indent, eol);
    body.lines(arms.iter().map(|a| a.as_ref()));

    let mut out = lines[..=start].concat();
    out.push_str(&body.finish());
    out.push_str(&lines[end..].concat());

    tracing::debug!(index, replaced = end - start - 1, inserted = arms.len(), "spliced template");
    Ok(out)
}

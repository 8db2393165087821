//! Line parser for tree diagrams.
//!
//! A tree diagram line has three parts: an indentation prefix made of
//! continuation bars and padding, an optional connector (`├──`, `└──`, or the
//! ASCII `|--` / `` `-- `` forms printed by `tree --charset=ascii`) and the
//! entry name. Depth is counted mechanically in fixed-width units of
//! [`INDENT_WIDTH`] characters; it is never inferred from the file.
//!
//! ```text
//! app/                 depth 0, directory
//! ├── src/             depth 1, directory
//! │   └── main.rs      depth 2, file
//! └── README.md        depth 1, file
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Width in characters of one indentation unit (`"│   "` or `"    "`).
///
/// Only bars, spaces and non-breaking spaces form units. A tab is not
/// indentation: it ends the prefix, and whatever follows it (glyphs included)
/// is kept as part of the name, so `"\t└── x"` is a depth-0 file named
/// `└── x`.
pub const INDENT_WIDTH: usize = 4;

/// Report line printed by `tree` after the diagram.
static SUMMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+ director(?:y|ies)(?:, \d+ files?)?$|^\d+ files?$")
        .expect("summary regex is valid")
});

/// One line of a tree diagram, reduced to its structural content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    /// Nesting level implied by the prefix.
    pub depth: usize,
    /// Entry name without surrounding whitespace or trailing separators.
    pub name: String,
    /// Whether the name was written with a trailing `/`.
    pub is_directory: bool,
}

impl ParsedLine {
    /// A line with no name carries no structure and must be skipped.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

fn is_bar(c: char) -> bool {
    matches!(c, '│' | '|')
}

fn is_padding(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}')
}

fn is_connector_start(c: char) -> bool {
    matches!(c, '├' | '└' | '|' | '`' | '+')
}

fn is_fill(c: char) -> bool {
    matches!(c, '─' | '-')
}

/// Length of the connector at the start of `chars`, if there is one.
///
/// A connector is a tee/corner glyph followed by at least one horizontal fill.
/// An ASCII `|` followed by padding is a continuation bar, not a connector.
fn connector_len(chars: &[char]) -> Option<usize> {
    let first = *chars.first()?;
    if !is_connector_start(first) {
        return None;
    }
    let fills = chars[1..].iter().take_while(|c| is_fill(**c)).count();
    (fills > 0).then_some(1 + fills)
}

/// Count the whole indentation units in a prefix.
///
/// A unit is a bar or padding character followed by padding up to
/// [`INDENT_WIDTH`]. A trailing partial unit is ignored.
fn count_units(prefix: &[char]) -> usize {
    prefix
        .chunks_exact(INDENT_WIDTH)
        .filter(|chunk| {
            let lead = chunk[0];
            (is_bar(lead) || is_padding(lead)) && chunk[1..].iter().all(|c| is_padding(*c))
        })
        .count()
}

/// Split off a trailing directory marker.
fn split_directory_suffix(name: &str) -> (String, bool) {
    if name.ends_with('/') {
        (name.trim_end_matches('/').trim().to_string(), true)
    } else {
        (name.to_string(), false)
    }
}

/// Parse one newline-stripped line of a tree diagram.
///
/// Never fails. Blank lines and lines made only of glyphs produce an empty
/// [`ParsedLine`] at depth 0.
pub fn parse_line(raw: &str) -> ParsedLine {
    let chars: Vec<char> = raw.trim_end().chars().collect();

    let mut prefix_len = 0;
    let mut connector = None;
    while prefix_len < chars.len() {
        if let Some(len) = connector_len(&chars[prefix_len..]) {
            connector = Some(len);
            break;
        }
        let c = chars[prefix_len];
        if is_bar(c) || is_padding(c) {
            prefix_len += 1;
        } else {
            break;
        }
    }

    let mut depth = count_units(&chars[..prefix_len]);
    let mut name_start = prefix_len;
    if let Some(len) = connector {
        // The connector itself marks the deepest level.
        depth += 1;
        name_start += len;
    }

    let rest: String = chars[name_start..].iter().collect();
    let (name, is_directory) = split_directory_suffix(rest.trim());

    if name.is_empty() {
        return ParsedLine::default();
    }

    ParsedLine {
        depth,
        name,
        is_directory,
    }
}

/// Whether `raw` is the `N directories, M files` report printed by `tree`.
///
/// Only an unindented line without a connector qualifies. The same text
/// behind a connector (`└── 2 files`) is an ordinary entry.
pub fn is_summary_line(raw: &str) -> bool {
    SUMMARY.is_match(raw.trim_end())
}

//! Route-name token parsing.
//!
//! A token such as `admin.edit_user_path(1,2)` is decomposed into a
//! [`ParsedRouteToken`] in three fixed steps:
//!
//! 1. **Prefix**: split on `.`; exactly two non-empty parts make the first
//!    one the prefix. Any other shape leaves the token unprefixed.
//! 2. **Parameters**: everything after the first `(` (minus an optional
//!    trailing `)`) is split on `,`.
//! 3. **Suffix**: the last `_`-separated segment selects the output kind
//!    (`path` or `url`); the remaining segments form the action.
//!
//! Parsing never fails. Input that doesn't follow the grammar produces an
//! action that won't be found in the registry.

use std::fmt;

/// Whether a route should render as a relative path or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputKind {
    /// `..._path`: a path such as `/users/login`.
    Path,
    /// `..._url`: an absolute URL including scheme and host.
    Url,
    /// Any other trailing segment. No path- or URL-specific processing applies.
    Unrecognized(String),
}

impl OutputKind {
    fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "path" => Self::Path,
            "url" => Self::Url,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns `true` for [`OutputKind::Url`].
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::Url)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => f.write_str("path"),
            Self::Url => f.write_str("url"),
            Self::Unrecognized(suffix) => f.write_str(suffix),
        }
    }
}

/// The structured form of a route-name token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRouteToken {
    /// The routing prefix (e.g. `admin`), if any.
    pub prefix: Option<String>,
    /// The requested output kind.
    pub output: OutputKind,
    /// The registry lookup key.
    pub action: String,
    /// Positional parameters, in order.
    pub params: Vec<String>,
}

/// Parses a route-name token.
///
/// # Examples
///
/// ```
/// use named_routes_urls::parser::{parse, OutputKind};
///
/// let parsed = parse("admin.edit_user_path(1,2)");
/// assert_eq!(parsed.prefix.as_deref(), Some("admin"));
/// assert_eq!(parsed.action, "edit_user");
/// assert_eq!(parsed.output, OutputKind::Path);
/// assert_eq!(parsed.params, vec!["1", "2"]);
/// ```
pub fn parse(token: &str) -> ParsedRouteToken {
    let (prefix, rest) = split_prefix(token);
    let (rest, params) = split_params(rest);
    let (action, output) = split_suffix(rest);

    ParsedRouteToken {
        prefix: prefix.map(str::to_string),
        output,
        action: action.to_string(),
        params,
    }
}

fn split_prefix(token: &str) -> (Option<&str>, &str) {
    if !token.contains('.') {
        return (None, token);
    }
    match tokenize(token, '.').as_slice() {
        [prefix, rest] if !prefix.is_empty() && !rest.is_empty() => (Some(*prefix), *rest),
        _ => (None, token),
    }
}

fn split_params(token: &str) -> (&str, Vec<String>) {
    let Some(open) = token.find('(') else {
        return (token, Vec::new());
    };

    let raw = &token[open + 1..];
    let raw = raw.strip_suffix(')').unwrap_or(raw);
    let params = if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::to_string).collect()
    };

    (&token[..open], params)
}

fn split_suffix(token: &str) -> (&str, OutputKind) {
    token.rsplit_once('_').map_or_else(
        || ("", OutputKind::from_suffix(token)),
        |(action, suffix)| (action, OutputKind::from_suffix(suffix)),
    )
}

/// Splits `input` on `separator`, ignoring separators nested inside `(...)`.
fn tokenize(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

//! Rendering route targets into paths.
//!
//! The resolver never builds paths itself; it hands the [`RouteTarget`] found
//! in the registry to a [`UrlBuilder`]. Any `Fn(&RouteTarget) -> RouteResult<String>`
//! closure is a builder, and [`PatternUrlBuilder`] is the bundled one.
//!
//! `PatternUrlBuilder` keeps an ordered list of connected path templates. A
//! template renders a target when its defaults agree with the target and every
//! remaining target field fills one of its `<name>` placeholders. Targets that
//! match no template fall back to `/<controller>/<action>` (just
//! `/<controller>` for the `index` action).

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use named_routes_core::{RouteError, RouteResult};

use crate::registry::INDEX_ACTION;
use crate::target::{RouteTarget, ACTION, CONTROLLER};

/// Characters escaped when a value is written into a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Renders a route target into a path such as `/users/login`.
pub trait UrlBuilder: Send + Sync {
    /// Renders `target`.
    ///
    /// # Errors
    ///
    /// Implementations decide what an unusable target means; the bundled
    /// builder returns [`RouteError::ImproperlyConfigured`].
    fn render(&self, target: &RouteTarget) -> RouteResult<String>;
}

impl<F> UrlBuilder for F
where
    F: Fn(&RouteTarget) -> RouteResult<String> + Send + Sync,
{
    fn render(&self, target: &RouteTarget) -> RouteResult<String> {
        self(target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A template connected to a [`PatternUrlBuilder`].
#[derive(Debug, Clone)]
struct ConnectedPattern {
    template: String,
    segments: Vec<Segment>,
    defaults: RouteTarget,
}

impl ConnectedPattern {
    fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    fn has_param(&self, name: &str) -> bool {
        self.params().any(|param| param == name)
    }

    fn matches(&self, target: &RouteTarget, controller: &str, action: &str) -> bool {
        if self.defaults.controller() != Some(controller)
            || self.defaults.action().unwrap_or(INDEX_ACTION) != action
        {
            return false;
        }

        let defaults_agree = self
            .defaults
            .extras()
            .all(|(key, value)| target.get(key) == Some(value));
        let extras_placed = target
            .extras()
            .all(|(key, _)| self.defaults.get(key).is_some() || self.has_param(key));
        let params_filled = self.params().all(|param| target.get(param).is_some());

        defaults_agree && extras_placed && params_filled
    }

    fn fill(&self, target: &RouteTarget) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(name) => {
                    let value = target.get(name).unwrap_or_default();
                    out.extend(utf8_percent_encode(value, PATH_SEGMENT));
                }
            }
        }
        ensure_leading_slash(out)
    }
}

/// A [`UrlBuilder`] backed by an ordered table of path templates.
///
/// Templates use `<name>` (or `<type:name>`) placeholders, filled from the
/// target field of the same name.
///
/// # Examples
///
/// ```
/// use named_routes_urls::builder::{PatternUrlBuilder, UrlBuilder};
/// use named_routes_urls::target::RouteTarget;
///
/// let mut builder = PatternUrlBuilder::new();
/// builder.connect("/login", RouteTarget::new("users", "login")).unwrap();
/// builder.connect("/blog/<slug>", RouteTarget::new("articles", "view")).unwrap();
///
/// assert_eq!(builder.render(&RouteTarget::new("users", "login")).unwrap(), "/login");
/// assert_eq!(
///     builder
///         .render(&RouteTarget::new("articles", "view").with("slug", "hello world"))
///         .unwrap(),
///     "/blog/hello%20world"
/// );
/// // No template: conventional fallback.
/// assert_eq!(builder.render(&RouteTarget::new("users", "edit")).unwrap(), "/users/edit");
/// assert_eq!(builder.render(&RouteTarget::new("users", "index")).unwrap(), "/users");
/// ```
#[derive(Default, Clone)]
pub struct PatternUrlBuilder {
    patterns: Vec<ConnectedPattern>,
}

impl fmt::Debug for PatternUrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.patterns.iter().map(|p| (&p.template, &p.defaults)))
            .finish()
    }
}

impl PatternUrlBuilder {
    /// Creates a builder with no templates (every target uses the fallback).
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects a path template to the target fields it renders.
    ///
    /// Templates are tried in connection order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::ImproperlyConfigured`] if `defaults` has no
    /// controller or the template has an unclosed or empty placeholder.
    pub fn connect(&mut self, template: &str, defaults: RouteTarget) -> RouteResult<()> {
        if defaults.controller().is_none() {
            return Err(RouteError::ImproperlyConfigured(format!(
                "Pattern '{template}' must name a {CONTROLLER}"
            )));
        }

        let segments = parse_template(template)?;
        tracing::debug!(template, route = %defaults, "connected path template");
        self.patterns.push(ConnectedPattern {
            template: template.to_string(),
            segments,
            defaults,
        });
        Ok(())
    }

    /// Returns the number of connected templates.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if no templates are connected.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl UrlBuilder for PatternUrlBuilder {
    fn render(&self, target: &RouteTarget) -> RouteResult<String> {
        let controller = target.controller().ok_or_else(|| {
            RouteError::ImproperlyConfigured(format!(
                "Route target {target} has no {CONTROLLER}"
            ))
        })?;
        let action = target.action().unwrap_or(INDEX_ACTION);

        if let Some(pattern) = self
            .patterns
            .iter()
            .find(|pattern| pattern.matches(target, controller, action))
        {
            return Ok(pattern.fill(target));
        }

        let mut path = format!("/{}", utf8_percent_encode(controller, PATH_SEGMENT));
        if action != INDEX_ACTION {
            path.push('/');
            path.extend(utf8_percent_encode(action, PATH_SEGMENT));
        }
        if target.extras().next().is_some() {
            tracing::trace!(route = %target, "fallback path ignores extra target fields");
        }
        Ok(path)
    }
}

/// Splits a template into literal text and `<name>` / `<type:name>` placeholders.
fn parse_template(template: &str) -> RouteResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut remaining = template;

    while !remaining.is_empty() {
        let Some(start) = remaining.find('<') else {
            segments.push(Segment::Literal(remaining.to_string()));
            break;
        };

        if start > 0 {
            segments.push(Segment::Literal(remaining[..start].to_string()));
        }

        let end = remaining[start..].find('>').ok_or_else(|| {
            RouteError::ImproperlyConfigured(format!(
                "Unclosed angle bracket in path template: {template}"
            ))
        })? + start;

        let inner = &remaining[start + 1..end];
        let name = inner.find(':').map_or(inner, |pos| &inner[pos + 1..]);
        if name.is_empty() || name == CONTROLLER || name == ACTION {
            return Err(RouteError::ImproperlyConfigured(format!(
                "Invalid placeholder '<{inner}>' in path template: {template}"
            )));
        }
        segments.push(Segment::Param(name.to_string()));

        remaining = &remaining[end + 1..];
    }

    Ok(segments)
}

fn ensure_leading_slash(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

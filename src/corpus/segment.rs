//! Route pattern segments and per-adapter placeholder rendering.

use serde::Serialize;

/// A single path segment in an abstract route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// A fixed literal segment, matched verbatim.
    Literal(String),
    /// A named parameter placeholder.
    Param(String),
}

/// Placeholder rendering hook.
///
/// Every router under test has its own placeholder syntax, so patterns are
/// rendered from the abstract segment list at the adapter boundary rather
/// than stored as pre-rendered strings.
pub trait PlaceholderStyle {
    /// Render a named parameter in this syntax.
    fn format_param(&self, name: &str) -> String;
}

/// `{name}` placeholder syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct Braced;

impl PlaceholderStyle for Braced {
    fn format_param(&self, name: &str) -> String {
        format!("{{{name}}}")
    }
}

/// `:name` placeholder syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColonPrefixed;

impl PlaceholderStyle for ColonPrefixed {
    fn format_param(&self, name: &str) -> String {
        format!(":{name}")
    }
}

/// An abstract route pattern: an ordered sequence of literal and parameter
/// segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    segments: Vec<Segment>,
}

impl RouteSpec {
    /// Create a route from its segments.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The ordered segments of this route.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of parameter segments.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Param(_)))
            .count()
    }

    /// Number of literal segments.
    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.segments.len() - self.param_count()
    }

    /// Render the pattern string using the given placeholder syntax.
    #[must_use]
    pub fn render(&self, style: &dyn PlaceholderStyle) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(name) => out.push_str(&style.format_param(name)),
            }
        }
        out
    }

    /// Concrete request path for this route, with each placeholder replaced
    /// by its parameter name as a literal stand-in value.
    #[must_use]
    pub fn probe_path(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Literal(value) | Segment::Param(value) => out.push_str(value),
            }
        }
        out
    }

    /// Structural match check: the path must have the same number of
    /// segments, literals must compare equal, and every parameter position
    /// must be non-empty.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let Some(path) = path.strip_prefix('/') else {
            return false;
        };
        let mut parts = path.split('/');
        for segment in &self.segments {
            let Some(part) = parts.next() else {
                return false;
            };
            match segment {
                Segment::Literal(lit) => {
                    if part != lit {
                        return false;
                    }
                }
                Segment::Param(_) => {
                    if part.is_empty() {
                        return false;
                    }
                }
            }
        }
        parts.next().is_none()
    }
}

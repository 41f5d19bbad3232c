//! Static route table and path dispatch.
//!
//! ARCHITECTURE
//! ============
//! The Leptos router owns history and link interception; which view a path
//! shows is decided here. Patterns are tried by class: exact literals first,
//! then patterns with parameter segments, then the wildcard. Within a class
//! declaration order wins, so colliding patterns resolve to the first one.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// One path segment of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Static(&'static str),
    /// Binds any non-empty path segment under this name.
    Param(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePattern {
    Segments(&'static [Segment]),
    /// Matches anything not matched by another pattern.
    Wildcard,
}

impl RoutePattern {
    fn is_literal(&self) -> bool {
        match self {
            Self::Segments(segments) => segments.iter().all(|s| matches!(s, Segment::Static(_))),
            Self::Wildcard => false,
        }
    }

    fn bind(&self, path: &[&str]) -> Option<Vec<(&'static str, String)>> {
        let Self::Segments(segments) = self else {
            return Some(Vec::new());
        };
        if segments.len() != path.len() {
            return None;
        }
        let mut params = Vec::new();
        for (segment, part) in segments.iter().zip(path) {
            match segment {
                Segment::Static(lit) if lit == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.push((*name, (*part).to_owned())),
            }
        }
        Some(params)
    }
}

/// Views reachable through the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Demo,
    Single,
    Signup,
    Login,
    Protected,
    NotFound,
}

/// Pattern-to-view binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub pattern: RoutePattern,
    pub view: ViewKind,
}

/// Name of the identifier bound by `/single/:id`.
pub const SINGLE_ID_PARAM: &str = "id";

pub const ROUTE_TABLE: &[RouteDescriptor] = &[
    RouteDescriptor { pattern: RoutePattern::Segments(&[]), view: ViewKind::Home },
    RouteDescriptor { pattern: RoutePattern::Segments(&[Segment::Static("demo")]), view: ViewKind::Demo },
    RouteDescriptor {
        pattern: RoutePattern::Segments(&[Segment::Static("single"), Segment::Param(SINGLE_ID_PARAM)]),
        view: ViewKind::Single,
    },
    RouteDescriptor { pattern: RoutePattern::Segments(&[Segment::Static("signup")]), view: ViewKind::Signup },
    RouteDescriptor { pattern: RoutePattern::Segments(&[Segment::Static("login")]), view: ViewKind::Login },
    RouteDescriptor { pattern: RoutePattern::Segments(&[Segment::Static("protected")]), view: ViewKind::Protected },
    RouteDescriptor { pattern: RoutePattern::Wildcard, view: ViewKind::NotFound },
];

/// Result of dispatching a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: ViewKind,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    fn not_found() -> Self {
        Self { view: ViewKind::NotFound, params: Vec::new() }
    }

    /// Value bound to parameter `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Dispatch `path` against `table`.
///
/// Query and fragment must already be stripped. Empty segments (leading,
/// trailing or doubled slashes) are ignored.
pub fn resolve(table: &[RouteDescriptor], path: &str) -> RouteMatch {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();

    let literal = table.iter().filter(|d| d.pattern.is_literal());
    let parameterized = table
        .iter()
        .filter(|d| !d.pattern.is_literal() && d.pattern != RoutePattern::Wildcard);

    for descriptor in literal.chain(parameterized) {
        if let Some(params) = descriptor.pattern.bind(&parts) {
            return RouteMatch { view: descriptor.view, params };
        }
    }

    table
        .iter()
        .find(|d| d.pattern == RoutePattern::Wildcard)
        .map_or_else(RouteMatch::not_found, |d| RouteMatch { view: d.view, params: Vec::new() })
}

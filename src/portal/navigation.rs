//! Route targets and the navigation seam used by the views. Views never decide how a
//! route is shown; they only ask the navigator to go there.

use std::fmt;
use tracing::info;

/// A navigation target such as `/skillup` or `/adminLogin`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let trimmed = path.trim();
        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

/// Navigator that keeps every visited route, newest last.
#[derive(Debug, Default)]
pub struct History {
    visited: Vec<Route>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Route> {
        self.visited.last()
    }

    #[must_use]
    pub fn visited(&self) -> &[Route] {
        &self.visited
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: &Route) {
        info!(route = %route, "navigate");
        self.visited.push(route.clone());
    }
}

//! Access guard shared by protected views. A view hands its render step to
//! [`RequireAuth::mount`]; when the capability check fails the guard navigates to the
//! redirect route and the view only gets a placeholder. This is a UX-only gate: the
//! API still enforces access on every request.

use super::{
    navigation::{Navigator, Route},
    session::SessionContext,
};
use tracing::debug;

/// Check a session must pass before protected content renders.
pub trait Capability {
    fn allows(&self, session: &SessionContext) -> bool;
}

/// Requires a non-empty stored token. Presence only; no validity or expiry check.
#[derive(Clone, Copy, Debug, Default)]
pub struct HasToken;

impl Capability for HasToken {
    fn allows(&self, session: &SessionContext) -> bool {
        session.is_authenticated()
    }
}

impl<F> Capability for F
where
    F: Fn(&SessionContext) -> bool,
{
    fn allows(&self, session: &SessionContext) -> bool {
        self(session)
    }
}

/// Outcome of mounting a guarded view.
#[derive(Debug, PartialEq, Eq)]
pub enum Gate<V> {
    Render(V),
    /// Loading placeholder shown while the redirect happens.
    Placeholder { redirected_to: Route },
}

impl<V> Gate<V> {
    pub fn into_view(self) -> Option<V> {
        match self {
            Gate::Render(view) => Some(view),
            Gate::Placeholder { .. } => None,
        }
    }

    pub const fn is_rendered(&self) -> bool {
        matches!(self, Gate::Render(_))
    }
}

#[derive(Clone, Debug)]
pub struct RequireAuth<C = HasToken> {
    capability: C,
    redirect: Route,
}

impl RequireAuth<HasToken> {
    #[must_use]
    pub fn token(redirect: Route) -> Self {
        Self::new(HasToken, redirect)
    }
}

impl<C: Capability> RequireAuth<C> {
    pub fn new(capability: C, redirect: Route) -> Self {
        Self {
            capability,
            redirect,
        }
    }

    pub fn redirect(&self) -> &Route {
        &self.redirect
    }

    /// Renders the view when the session passes the check, otherwise redirects. The
    /// check runs once, synchronously, at mount.
    pub fn mount<V>(
        &self,
        session: &SessionContext,
        navigator: &mut dyn Navigator,
        render: impl FnOnce() -> V,
    ) -> Gate<V> {
        if self.capability.allows(session) {
            Gate::Render(render())
        } else {
            debug!(redirect = %self.redirect, "access denied, redirecting");
            navigator.navigate(&self.redirect);
            Gate::Placeholder {
                redirected_to: self.redirect.clone(),
            }
        }
    }
}

//! Navigation guard evaluated before every client route transition.

use crate::client::{router::Route, session::SessionState};

/// Outcome of a navigation-guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested route
    Allow,
    /// Abandon the requested route and navigate to the carried one instead
    Redirect(Route),
}

/// Decide whether a route transition may proceed given the current
/// session.
///
/// Unauthenticated sessions may only reach the registration route;
/// authenticated sessions are sent to their profile instead of the
/// registration page. Re-evaluated on every navigation attempt, since the
/// session can change between them.
pub fn check_navigation(destination: Route, session: &dyn SessionState) -> NavigationDecision {
    if !destination.is_public() && !session.is_logged_in() {
        return NavigationDecision::Redirect(Route::Registration);
    }

    if destination == Route::Registration && session.is_logged_in() {
        return NavigationDecision::Redirect(Route::Profile);
    }

    NavigationDecision::Allow
}

//! Route guard run before any page initializes

use serde::Serialize;

use crate::session::SessionStore;

/// Pages a command can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Page {
    /// Sign-in page, reachable without a token
    Login,
    /// Protected dashboard page
    Dashboard,
}

impl Page {
    pub(crate) fn is_protected(self) -> bool {
        matches!(self, Page::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GuardOutcome {
    /// Continue initializing the requested page
    Proceed,
    /// Abort and navigate to another page instead
    Redirect(Page),
}

/// Decide whether `page` may initialize with the current session.
/// The token is only checked for presence, never validated.
pub(crate) fn guard(page: Page, session: &SessionStore) -> GuardOutcome {
    let has_token = session.token().is_some();
    match page {
        p if p.is_protected() && !has_token => GuardOutcome::Redirect(Page::Login),
        Page::Login if has_token => GuardOutcome::Redirect(Page::Dashboard),
        _ => GuardOutcome::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    fn session(token: Option<&str>) -> SessionStore {
        let mut store = SessionStore::new(Box::new(MemoryStorage::default()));
        if let Some(t) = token {
            store.set_token(t).unwrap();
        }
        store
    }

    #[test]
    fn protected_without_token_redirects_to_login() {
        assert_eq!(
            guard(Page::Dashboard, &session(None)),
            GuardOutcome::Redirect(Page::Login)
        );
    }

    #[test]
    fn login_with_token_redirects_to_dashboard() {
        assert_eq!(
            guard(Page::Login, &session(Some("T1"))),
            GuardOutcome::Redirect(Page::Dashboard)
        );
    }

    #[test]
    fn protected_with_token_proceeds() {
        assert_eq!(
            guard(Page::Dashboard, &session(Some("T1"))),
            GuardOutcome::Proceed
        );
    }

    #[test]
    fn login_without_token_proceeds() {
        assert_eq!(guard(Page::Login, &session(None)), GuardOutcome::Proceed);
    }
}

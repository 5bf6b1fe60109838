//! App-wide yewdux store.
//!
//! # Design
//! - The session store stays the source of truth; [`AppStore::session`] is a
//!   mirror refreshed from its subscription so components re-render on change.
//! - Shell layout preferences live beside it.

use cifdesk_auth::Session;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Mirror of the session store.
    pub session: Session,
    /// Whether the sidebar shows labels.
    pub sidebar_expanded: bool,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            session: Session::Loading,
            sidebar_expanded: true,
        }
    }
}

/// Replace the mirrored session.
pub fn apply_session(store: &mut AppStore, session: Session) {
    store.session = session;
}

/// Flip the sidebar and return the new state.
pub fn toggle_sidebar(store: &mut AppStore) -> bool {
    store.sidebar_expanded = !store.sidebar_expanded;
    store.sidebar_expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use cifdesk_api_models::UserProfile;
    use cifdesk_auth::AuthenticatedSession;

    #[test]
    fn starts_loading_with_expanded_sidebar() {
        let store = AppStore::default();
        assert!(store.session.is_loading());
        assert!(store.sidebar_expanded);
    }

    #[test]
    fn reducers_update_slices() {
        let mut store = AppStore::default();
        apply_session(
            &mut store,
            Session::Authenticated(AuthenticatedSession {
                token: "tok".to_string(),
                profile: UserProfile::default(),
            }),
        );
        assert!(store.session.is_authenticated());
        assert!(!toggle_sidebar(&mut store));
        assert!(toggle_sidebar(&mut store));
    }
}

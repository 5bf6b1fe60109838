//! Session store: the single source of truth for who is signed in.
//!
//! # Design
//! - The store starts in [`Session::Loading`] until [`SessionStore::hydrate`] reads persisted state.
//! - Token and profile only ever change together; readers never see one without the other.
//! - Listeners run after the internal borrow is released so they may read the store again.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use cifdesk_api_models::{LoginRequest, LoginResponse, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AuthError, AuthResult};

/// Token plus the profile it was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedSession {
    /// Opaque bearer token.
    pub token: String,
    /// Profile of the signed-in operator.
    pub profile: UserProfile,
}

/// Observable session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Persisted state has not been read yet.
    #[default]
    Loading,
    /// No operator is signed in.
    Anonymous,
    /// An operator is signed in.
    Authenticated(AuthenticatedSession),
}

impl Session {
    /// Bearer token when authenticated.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(session) => Some(session.token.as_str()),
            Self::Loading | Self::Anonymous => None,
        }
    }

    /// Operator profile when authenticated.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(session) => Some(&session.profile),
            Self::Loading | Self::Anonymous => None,
        }
    }

    /// Whether hydration is still pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether an operator is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw form values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate and convert into the wire request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when either field is blank.
    pub fn into_request(self) -> AuthResult<LoginRequest> {
        let email = self.email.trim().to_string();
        if email.is_empty() || self.password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(LoginRequest {
            email,
            password: self.password,
        })
    }
}

/// Durable storage for the signed-in session.
///
/// Implementations swallow and log their own storage failures; a session that
/// cannot be persisted is still valid for the current page.
pub trait SessionPersistence {
    /// Read the persisted session, if any.
    fn load(&self) -> Option<AuthenticatedSession>;
    /// Persist the session.
    fn save(&self, session: &AuthenticatedSession);
    /// Remove any persisted session.
    fn clear(&self);
}

/// In-memory persistence, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<AuthenticatedSession>>>,
}

impl MemoryPersistence {
    /// Persistence pre-seeded with a session.
    #[must_use]
    pub fn with_session(session: AuthenticatedSession) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(session))),
        }
    }

    /// Currently stored session.
    #[must_use]
    pub fn stored(&self) -> Option<AuthenticatedSession> {
        self.slot.borrow().clone()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Option<AuthenticatedSession> {
        self.stored()
    }

    fn save(&self, session: &AuthenticatedSession) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Collaborator that exchanges credentials for a token and profile.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Authenticate the request.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] describing why no session was granted.
    async fn authenticate(&self, request: &LoginRequest) -> AuthResult<LoginResponse>;
}

type Listener = Rc<dyn Fn(&Session)>;

struct Inner {
    session: Session,
    persistence: Box<dyn SessionPersistence>,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

/// Cheaply cloneable handle to the session store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SessionStore")
            .field("session", &self.inner.borrow().session)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    /// Create a store in the loading state.
    #[must_use]
    pub fn new(persistence: impl SessionPersistence + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                session: Session::Loading,
                persistence: Box::new(persistence),
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// Read persisted state and leave the loading state.
    ///
    /// A persisted entry with a blank token is discarded.
    pub fn hydrate(&self) -> Session {
        let restored = self.inner.borrow().persistence.load();
        let next = match restored {
            Some(session) if !session.token.trim().is_empty() => Session::Authenticated(session),
            Some(_) => {
                warn!("discarding persisted session without token");
                self.inner.borrow().persistence.clear();
                Session::Anonymous
            }
            None => Session::Anonymous,
        };
        debug!(
            authenticated = next.is_authenticated(),
            "session hydrated"
        );
        self.commit(next.clone());
        next
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    /// Current bearer token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().session.token().map(str::to_string)
    }

    /// Exchange credentials for a session.
    ///
    /// On failure the current session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] for blank input, the
    /// collaborator's error when it refuses, or [`AuthError::MissingToken`] when
    /// it replies without a token.
    pub async fn login(
        &self,
        authenticator: &dyn Authenticator,
        credentials: Credentials,
    ) -> AuthResult<Session> {
        let request = credentials.into_request()?;
        let response = authenticator
            .authenticate(&request)
            .await
            .inspect_err(|err| warn!(error = %err, "login attempt failed"))?;
        if response.token.trim().is_empty() {
            warn!("login response carried an empty token");
            return Err(AuthError::MissingToken);
        }
        let granted = AuthenticatedSession {
            token: response.token,
            profile: response.user,
        };
        self.inner.borrow().persistence.save(&granted);
        let next = Session::Authenticated(granted);
        self.commit(next.clone());
        info!("operator signed in");
        Ok(next)
    }

    /// Sign out and clear persisted state. Calling it while signed out is a no-op.
    pub fn logout(&self) {
        if matches!(self.inner.borrow().session, Session::Anonymous) {
            return;
        }
        self.inner.borrow().persistence.clear();
        self.commit(Session::Anonymous);
        info!("operator signed out");
    }

    /// Register a listener invoked after every session change.
    ///
    /// The listener stays attached until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener = inner.next_listener.wrapping_add(1);
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    fn commit(&self, next: Session) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.session == next {
                return;
            }
            inner.session = next.clone();
            inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        };
        for listener in listeners {
            listener(&next);
        }
    }
}

/// Listener registration; dropping it detaches the listener.
#[must_use = "dropping the subscription detaches the listener"]
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

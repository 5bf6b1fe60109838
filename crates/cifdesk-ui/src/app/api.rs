//! API context shared by every screen.
//!
//! # Design
//! - Build exactly one transport, session store and gateway per app boot.
//! - Components reach them through context instead of rebuilding clients.

use std::rc::Rc;

use cifdesk_auth::SessionStore;

use crate::core::auth::ApiAuthenticator;
use crate::core::gateway::{Gateway, Transport};
use crate::services::transport::FetchTransport;

/// Shared API collaborators.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Token-attaching gateway.
    pub gateway: Gateway,
    /// Login collaborator.
    pub authenticator: Rc<ApiAuthenticator>,
}

impl ApiCtx {
    /// Wire the browser transport to `session` for the API at `base_url`.
    pub(crate) fn new(session: SessionStore, base_url: &str) -> Self {
        let transport: Rc<dyn Transport> = Rc::new(FetchTransport);
        Self {
            gateway: Gateway::new(Rc::clone(&transport), session, base_url),
            authenticator: Rc::new(ApiAuthenticator::new(transport, base_url)),
        }
    }

    /// The session store behind the gateway.
    pub(crate) const fn session(&self) -> &SessionStore {
        self.gateway.session()
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.authenticator, &other.authenticator)
    }
}

//! Test doubles shared by core and feature tests.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use cifdesk_api_models::UserProfile;
use cifdesk_auth::{AuthenticatedSession, MemoryPersistence, SessionStore};

use crate::core::gateway::{ApiRequest, ApiResponse, Gateway, Method, Transport, TransportError};

pub(crate) const BASE_URL: &str = "http://api.test";

type Scripted = Result<ApiResponse, TransportError>;

/// Transport answering from a scripted route table and recording every request.
/// The most recently scripted route for a method and URL wins.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    routes: RefCell<Vec<(Method, String, Scripted)>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes.borrow_mut().push((
            method,
            format!("{BASE_URL}{path}"),
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        ));
    }

    pub(crate) fn fail(&self, method: Method, path: &str) {
        self.routes.borrow_mut().push((
            method,
            format!("{BASE_URL}{path}"),
            Err(TransportError::Send {
                detail: "connection refused".to_string(),
            }),
        ));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{BASE_URL}{path}");
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.method == method && request.url == url)
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.routes
            .borrow()
            .iter()
            .rev()
            .find(|(method, url, _)| *method == request.method && *url == request.url)
            .map_or_else(
                || {
                    Ok(ApiResponse {
                        status: 404,
                        body: "{}".to_string(),
                    })
                },
                |(_, _, scripted)| scripted.clone(),
            )
    }
}

pub(crate) fn signed_in_store(token: &str) -> SessionStore {
    let store = SessionStore::new(MemoryPersistence::with_session(AuthenticatedSession {
        token: token.to_string(),
        profile: UserProfile {
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            email: "ana@example.test".to_string(),
            ..UserProfile::default()
        },
    }));
    store.hydrate();
    store
}

pub(crate) fn gateway_with(transport: &Rc<RecordingTransport>) -> Gateway {
    Gateway::new(transport.clone(), signed_in_store("tok-test"), BASE_URL)
}

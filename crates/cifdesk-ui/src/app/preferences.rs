//! Persistence and environment helpers for the app shell.

use cifdesk_auth::{AuthenticatedSession, SessionPersistence, TOKEN_COOKIE};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Url};

use crate::core::config::{
    API_BASE_OVERRIDE_KEY, SESSION_STORAGE_KEY, SIDEBAR_STORAGE_KEY, normalize_api_base,
    resolve_api_base,
};

/// Session persisted in local storage, mirrored into the `token` cookie the
/// edge gate reads.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStoragePersistence;

impl SessionPersistence for LocalStoragePersistence {
    fn load(&self) -> Option<AuthenticatedSession> {
        let session = LocalStorage::get::<AuthenticatedSession>(SESSION_STORAGE_KEY).ok()?;
        // Keep the cookie in step after a reload or an expired cookie.
        if !session.token.trim().is_empty() {
            write_token_cookie(Some(&session.token));
        }
        Some(session)
    }

    fn save(&self, session: &AuthenticatedSession) {
        set_storage(SESSION_STORAGE_KEY, session);
        write_token_cookie(Some(&session.token));
    }

    fn clear(&self) {
        delete_storage(SESSION_STORAGE_KEY);
        write_token_cookie(None);
    }
}

fn write_token_cookie(token: Option<&str>) {
    let cookie = match token {
        Some(token) => format!("{TOKEN_COOKIE}={token}; path=/; SameSite=Lax"),
        None => format!("{TOKEN_COOKIE}=; path=/; max-age=0; SameSite=Lax"),
    };
    let Ok(html) = document().dyn_into::<HtmlDocument>() else {
        log_storage_error("cookie", TOKEN_COOKIE, "document is not an HTML document");
        return;
    };
    if let Err(err) = html.set_cookie(&cookie) {
        log_storage_error("cookie", TOKEN_COOKIE, &format!("{err:?}"));
    }
}

pub(crate) fn load_sidebar_expanded() -> bool {
    LocalStorage::get::<bool>(SIDEBAR_STORAGE_KEY).unwrap_or(true)
}

pub(crate) fn persist_sidebar_expanded(expanded: bool) {
    set_storage(SIDEBAR_STORAGE_KEY, expanded);
}

pub(crate) fn api_base_url() -> String {
    if let Some(base) = LocalStorage::get::<String>(API_BASE_OVERRIDE_KEY)
        .ok()
        .and_then(|raw| normalize_api_base(&raw))
    {
        return base;
    }
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    if let Ok(url) = Url::new(&href) {
        return resolve_api_base(&url.protocol(), &url.hostname(), &url.port());
    }
    "http://localhost:3000".to_string()
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn delete_storage(key: &'static str) {
    LocalStorage::delete(key);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}

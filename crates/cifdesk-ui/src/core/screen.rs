//! Screen state cell and the async list-screen operations.
//!
//! # Design
//! - A [`ScreenCell`] owns one mounted screen's state; closing it on unmount
//!   turns every later update (from a request still in flight) into a no-op.
//! - No `RefCell` borrow is held across an `.await`: operations read what they
//!   need, await the gateway, then apply the result in one update.
//! - The view re-renders through a notifier invoked after each update.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cifdesk_api_models::DetailRecord;
use futures_util::future::join_all;
use tracing::debug;

use crate::core::detail::{DetailLoader, DetailOutcome};
use crate::core::gateway::{Gateway, GatewayError, Method};
use crate::core::list::{FetchKind, FetchOutcome, ListController, Record, SearchPlan};
use crate::core::notify::{NotificationChannel, NotificationKind};

type Notifier = Rc<dyn Fn()>;

/// Shared, closable state for one mounted screen.
pub struct ScreenCell<S> {
    state: Rc<RefCell<S>>,
    open: Rc<Cell<bool>>,
    notifier: Rc<RefCell<Option<Notifier>>>,
}

impl<S> Clone for ScreenCell<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            open: Rc::clone(&self.open),
            notifier: Rc::clone(&self.notifier),
        }
    }
}

impl<S> PartialEq for ScreenCell<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<S> ScreenCell<S> {
    /// Wrap initial state.
    #[must_use]
    pub fn new(state: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            open: Rc::new(Cell::new(true)),
            notifier: Rc::new(RefCell::new(None)),
        }
    }

    /// Register the re-render hook.
    pub fn set_notifier(&self, notifier: impl Fn() + 'static) {
        *self.notifier.borrow_mut() = Some(Rc::new(notifier));
    }

    /// Read the state.
    pub fn with<T>(&self, read: impl FnOnce(&S) -> T) -> T {
        read(&self.state.borrow())
    }

    /// Mutate the state and notify the view. Returns `None` once closed.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut S) -> T) -> Option<T> {
        if !self.open.get() {
            return None;
        }
        let result = mutate(&mut self.state.borrow_mut());
        let notifier = self.notifier.borrow().clone();
        if let Some(notify) = notifier {
            notify();
        }
        Some(result)
    }

    /// Close the cell; later updates are dropped.
    pub fn close(&self) {
        self.open.set(false);
        self.notifier.borrow_mut().take();
    }
}

impl<S: Clone> ScreenCell<S> {
    /// Clone of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> S {
        self.state.borrow().clone()
    }
}

/// State of a list screen: table, detail view and notification.
#[derive(Clone, Debug, PartialEq)]
pub struct ListScreen<R> {
    /// Table state.
    pub list: ListController<R>,
    /// Detail view state.
    pub detail: DetailLoader,
    /// Live notification.
    pub notices: NotificationChannel,
}

impl<R: Record> Default for ListScreen<R> {
    fn default() -> Self {
        Self {
            list: ListController::default(),
            detail: DetailLoader::default(),
            notices: NotificationChannel::default(),
        }
    }
}

/// Async operations of a list screen, bound to its cell and the gateway.
pub struct ListScreenHandle<R> {
    cell: ScreenCell<ListScreen<R>>,
    gateway: Gateway,
}

impl<R> Clone for ListScreenHandle<R> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            gateway: self.gateway.clone(),
        }
    }
}

impl<R> PartialEq for ListScreenHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

impl<R: Record> ListScreenHandle<R> {
    /// Bind a fresh screen to `gateway`.
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self {
            cell: ScreenCell::new(ListScreen::default()),
            gateway,
        }
    }

    /// The screen's state cell.
    #[must_use]
    pub const fn cell(&self) -> &ScreenCell<ListScreen<R>> {
        &self.cell
    }

    /// The gateway requests go through.
    #[must_use]
    pub const fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Validate `raw` and, when valid, fetch matching rows.
    pub async fn search(&self, raw: &str) {
        let Some(plan) = self.cell.update(|screen| screen.list.plan_search(raw)) else {
            return;
        };
        if let SearchPlan::Fetch(query) = plan {
            self.fetch(FetchKind::Search(query)).await;
        }
    }

    /// Fetch every row from the list-all endpoint.
    pub async fn load_all(&self) {
        self.fetch(FetchKind::All).await;
    }

    /// Repeat the last fetch, if any.
    pub async fn refresh(&self) {
        let last = self.cell.with(|screen| screen.list.last_fetch().cloned());
        if let Some(kind) = last {
            self.fetch(kind).await;
        }
    }

    /// Delete every selected row, then raise one notice and refresh.
    ///
    /// Individual failures never abort the batch. When any delete reports an
    /// expired session the screen is about to redirect, so no notice is shown.
    pub async fn bulk_delete(&self) {
        let Some(delete_path) = R::schema().endpoints.delete else {
            return;
        };
        let Some(Some(ids)) = self.cell.update(|screen| screen.list.begin_bulk_delete()) else {
            return;
        };
        let total = ids.len();
        debug!(total, "bulk delete started");
        let paths: Vec<String> = ids.iter().map(|id| delete_path(id)).collect();
        let results = join_all(
            paths
                .iter()
                .map(|path| self.gateway.call(Method::Delete, path, None)),
        )
        .await;
        let failed = results.iter().filter(|result| result.is_err()).count();
        let expired = results
            .iter()
            .any(|result| matches!(result, Err(GatewayError::Unauthorized)));

        let applied = self.cell.update(|screen| {
            let (kind, message) = screen.list.finish_bulk_delete(total, failed);
            if !expired {
                screen.notices.notify(kind, message);
            }
        });
        if applied.is_some() && !expired {
            self.refresh().await;
        }
    }

    /// Fetch and open the detail view for `id`.
    pub async fn load_detail(&self, id: &str) {
        let Some(ticket) = self.cell.update(|screen| screen.detail.begin(id)) else {
            return;
        };
        let path = (R::schema().endpoints.detail)(id);
        let result = self.gateway.get_json::<DetailRecord>(&path).await;
        let messages = &R::schema().messages;
        self.cell.update(|screen| {
            let outcome = screen.detail.resolve(
                ticket,
                result,
                messages.detail_failed,
                messages.detail_network,
            );
            if let DetailOutcome::Failed {
                notice: Some(message),
            } = outcome
            {
                screen.notices.notify(NotificationKind::Error, message);
            }
        });
    }

    /// Raise a notification on this screen.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        self.cell.update(|screen| {
            screen.notices.notify(kind, message);
        });
    }

    async fn fetch(&self, kind: FetchKind) {
        let endpoints = &R::schema().endpoints;
        let path = match &kind {
            FetchKind::All => endpoints.list_all.to_string(),
            FetchKind::Search(query) => match endpoints.search {
                Some(search_path) => search_path(query),
                None => return,
            },
        };
        let Some(ticket) = self.cell.update(|screen| screen.list.begin_fetch(kind)) else {
            return;
        };
        let result = self.gateway.get_json::<Vec<R>>(&path).await;
        self.cell.update(|screen| {
            if let FetchOutcome::Failed {
                notice: Some(message),
            } = screen.list.finish_fetch(ticket, result)
            {
                screen.notices.notify(NotificationKind::Error, message);
            }
        });
    }
}

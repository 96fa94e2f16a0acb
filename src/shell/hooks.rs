// SPDX-License-Identifier: MPL-2.0
//! The shell's callable surface.
//!
//! Components never reach the shell directly. They hold a cloneable
//! [`ShellHandle`] and send [`ShellRequest`]s through it; the application
//! forwards those requests to [`Shell::handle_request`](super::Shell::handle_request).
//!
//! The handle is created by a worker subscription ([`worker`]) which emits it
//! once as [`HookEvent::Ready`] and then relays every request as
//! [`HookEvent::Request`]. The shell keeps it in a single [`Hooks`] slot.

use crate::app::route::Route;
use crate::ui::notifications::{ToastId, ToastKind};
use iced::futures::channel::mpsc::Sender;
use iced::futures::{SinkExt, Stream};
use iced::stream;
use tokio::sync::mpsc;

/// A request sent to the shell through a [`ShellHandle`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShellRequest {
    /// Show a toast; the id was allocated by the handle.
    Notify {
        id: ToastId,
        kind: ToastKind,
        title: String,
        message: Option<String>,
    },
    /// Remove a toast before its timeout.
    Dismiss(ToastId),
    /// Navigate to a route.
    Open(Route),
}

/// Cloneable sender any component can use to reach the shell.
#[derive(Debug, Clone)]
pub struct ShellHandle {
    tx: mpsc::UnboundedSender<ShellRequest>,
}

impl ShellHandle {
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<ShellRequest>) -> Self {
        Self { tx }
    }

    /// Creates a handle together with the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ShellRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Requests a toast and returns its id right away.
    ///
    /// Pass the id to [`ShellHandle::dismiss`] to cancel it early. Both
    /// requests travel the same channel, so the dismissal is applied after
    /// the toast was shown even when neither has been processed yet.
    pub fn notify(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: Option<String>,
    ) -> ToastId {
        let id = ToastId::next();
        self.send(ShellRequest::Notify {
            id,
            kind,
            title: title.into(),
            message,
        });
        id
    }

    pub fn dismiss(&self, id: ToastId) {
        self.send(ShellRequest::Dismiss(id));
    }

    pub fn open(&self, route: Route) {
        self.send(ShellRequest::Open(route));
    }

    pub fn open_login(&self) {
        self.open(Route::Login);
    }

    pub fn open_crypto_checker(&self) {
        self.open(Route::CryptoChecker);
    }

    /// Whether the shell side of the channel is gone.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Whether both handles feed the same shell.
    #[must_use]
    pub fn same_shell(&self, other: &ShellHandle) -> bool {
        self.tx.same_channel(&other.tx)
    }

    fn send(&self, request: ShellRequest) {
        if let Err(error) = self.tx.send(request) {
            tracing::warn!(request = ?error.0, "shell is gone, request dropped");
        }
    }
}

/// Outcome of [`Hooks::install`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation {
    /// The slot was empty and now holds the handle.
    Installed,
    /// A live handle was already bound; the new one was ignored.
    AlreadyInstalled,
    /// The bound handle was closed and got replaced.
    Replaced,
}

/// Single slot holding the bound [`ShellHandle`].
#[derive(Debug, Default)]
pub struct Hooks {
    handle: Option<ShellHandle>,
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handle` unless a live handle is already bound.
    pub fn install(&mut self, handle: ShellHandle) -> Installation {
        match &self.handle {
            Some(bound) if !bound.is_closed() => {
                tracing::debug!("shell hooks already installed");
                Installation::AlreadyInstalled
            }
            Some(_) => {
                tracing::debug!("replacing closed shell hooks");
                self.handle = Some(handle);
                Installation::Replaced
            }
            None => {
                tracing::debug!("shell hooks installed");
                self.handle = Some(handle);
                Installation::Installed
            }
        }
    }

    #[must_use]
    pub fn handle(&self) -> Option<&ShellHandle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_closed())
    }

    /// Number of bound handles; never more than one.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        usize::from(self.handle.is_some())
    }
}

/// Events produced by the hook [`worker`].
#[derive(Debug, Clone)]
pub enum HookEvent {
    Ready(ShellHandle),
    Request(ShellRequest),
}

/// Stream that creates the shell handle, emits it, then relays its requests.
pub fn worker() -> impl Stream<Item = HookEvent> {
    stream::channel(100, |mut output: Sender<HookEvent>| async move {
        let (handle, mut rx) = ShellHandle::channel();

        if output.send(HookEvent::Ready(handle)).await.is_err() {
            return;
        }

        while let Some(request) = rx.recv().await {
            if output.send(HookEvent::Request(request)).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_sends_request_with_returned_id() {
        let (handle, mut rx) = ShellHandle::channel();
        let id = handle.notify(ToastKind::Info, "hello", Some("body".into()));

        match rx.try_recv().expect("request") {
            ShellRequest::Notify {
                id: sent,
                kind,
                title,
                message,
            } => {
                assert_eq!(sent, id);
                assert_eq!(kind, ToastKind::Info);
                assert_eq!(title, "hello");
                assert_eq!(message.as_deref(), Some("body"));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn dismiss_follows_notify_on_the_same_channel() {
        let (handle, mut rx) = ShellHandle::channel();
        let id = handle.notify(ToastKind::Success, "saved", None);
        handle.dismiss(id);

        assert!(matches!(rx.try_recv(), Ok(ShellRequest::Notify { id: sent, .. }) if sent == id));
        assert_eq!(rx.try_recv().ok(), Some(ShellRequest::Dismiss(id)));
    }

    #[test]
    fn open_helpers_target_their_routes() {
        let (handle, mut rx) = ShellHandle::channel();
        handle.open_login();
        handle.open_crypto_checker();

        assert_eq!(rx.try_recv().ok(), Some(ShellRequest::Open(Route::Login)));
        assert_eq!(
            rx.try_recv().ok(),
            Some(ShellRequest::Open(Route::CryptoChecker))
        );
    }

    #[test]
    fn sending_to_a_closed_shell_does_not_panic() {
        let (handle, rx) = ShellHandle::channel();
        drop(rx);
        assert!(handle.is_closed());
        handle.notify(ToastKind::Error, "lost", None);
        handle.open_login();
    }

    #[test]
    fn install_twice_binds_one_handle() {
        let mut hooks = Hooks::new();
        let (first, _rx1) = ShellHandle::channel();
        let (second, _rx2) = ShellHandle::channel();

        assert_eq!(hooks.install(first.clone()), Installation::Installed);
        assert_eq!(hooks.install(second), Installation::AlreadyInstalled);
        assert_eq!(hooks.bound_count(), 1);
        assert!(hooks.handle().is_some_and(|h| h.same_shell(&first)));
    }

    #[test]
    fn closed_handle_is_replaced() {
        let mut hooks = Hooks::new();
        let (stale, rx) = ShellHandle::channel();
        hooks.install(stale);
        drop(rx);
        assert!(!hooks.is_installed());

        let (fresh, _rx) = ShellHandle::channel();
        assert_eq!(hooks.install(fresh.clone()), Installation::Replaced);
        assert_eq!(hooks.bound_count(), 1);
        assert!(hooks.is_installed());
        assert!(hooks.handle().is_some_and(|h| h.same_shell(&fresh)));
    }
}

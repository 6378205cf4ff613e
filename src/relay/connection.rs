// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WebSocket connection owned by the event relay.

use std::fmt;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::sync::{oneshot, watch};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::{InboundEvent, ObserverList, ReconnectionPolicy, SubscriptionId};
use crate::error::{Error, ProtocolError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connection state of an [`EventRelay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// [`EventRelay::connect`] was never called.
    Idle,
    /// Handshake in progress.
    Connecting,
    /// Connected; frames are being dispatched.
    Open,
    /// Waiting for or performing a reconnection attempt (1-based).
    Reconnecting {
        /// Current attempt number.
        attempt: u32,
    },
    /// The connection is gone and no reconnection is pending.
    Closed,
}

impl ConnectionState {
    /// Returns true if the relay is connected.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns true if a connection exists or is being established.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            Self::Connecting | Self::Open | Self::Reconnecting { .. }
        )
    }
}

/// Why the frame loop of one connection ended.
enum LoopExit {
    /// [`EventRelay::close`] was called.
    Shutdown,
    /// The server closed the connection or the transport failed.
    Disconnected,
}

/// Relay of server-pushed events to registered observers.
///
/// Owns at most one WebSocket connection at a time. Each inbound frame is
/// decoded as JSON and delivered to every registered observer, in
/// registration order, before the next frame is read. Frames that are not
/// valid JSON are logged and skipped.
///
/// `EventRelay` is cheaply cloneable (via `Arc`); clones share the
/// connection and the observer list.
///
/// # Examples
///
/// ```no_run
/// use gohome_client::relay::EventRelay;
///
/// # async fn example() -> gohome_client::Result<()> {
/// let relay = EventRelay::new("ws://192.168.1.10:8080/ws");
///
/// relay.register(|event| {
///     println!("received {}", event.value());
/// });
///
/// relay.connect().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EventRelay {
    inner: Arc<RelayInner>,
}

struct RelayInner {
    url: String,
    reconnection: ReconnectionPolicy,
    observers: ObserverList,
    state_tx: watch::Sender<ConnectionState>,
    /// Stops the frame loop of the current connection.
    shutdown_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl EventRelay {
    /// Creates a relay for `url` that does not reconnect.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_reconnection(url, ReconnectionPolicy::disabled())
    }

    /// Creates a relay for `url` with a reconnection policy.
    #[must_use]
    pub fn with_reconnection(url: impl Into<String>, reconnection: ReconnectionPolicy) -> Self {
        let (state_tx, _) = watch::channel(ConnectionState::Idle);
        Self {
            inner: Arc::new(RelayInner {
                url: url.into(),
                reconnection,
                observers: ObserverList::new(),
                state_tx,
                shutdown_tx: Mutex::new(None),
            }),
        }
    }

    /// Returns the WebSocket URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }

    /// Returns the reconnection policy.
    #[must_use]
    pub fn reconnection(&self) -> &ReconnectionPolicy {
        &self.inner.reconnection
    }

    /// Returns the current connection state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        *self.inner.state_tx.borrow()
    }

    /// Returns a receiver notified on every state transition.
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.state_tx.subscribe()
    }

    /// Registers an observer for inbound events.
    ///
    /// The observer receives every event that arrives after this call.
    pub fn register<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&InboundEvent) + Send + Sync + 'static,
    {
        self.inner.observers.register(observer)
    }

    /// Removes an observer.
    ///
    /// Returns `true` if an observer was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.observers.unsubscribe(id)
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Opens the connection and starts dispatching frames.
    ///
    /// Returns once the handshake completed. Allowed when the relay is
    /// [`Idle`](ConnectionState::Idle) or [`Closed`](ConnectionState::Closed).
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::AlreadyConnected` if a connection is live,
    /// `ProtocolError::WebSocket` if the handshake fails, or
    /// `ProtocolError::ClosedDuringHandshake` if [`close`](Self::close) was
    /// called before it completed. The relay is `Closed` after either failure.
    pub async fn connect(&self) -> Result<(), Error> {
        let claimed = self.inner.state_tx.send_if_modified(|state| {
            if state.is_live() {
                return false;
            }
            *state = ConnectionState::Connecting;
            true
        });
        if !claimed {
            return Err(ProtocolError::AlreadyConnected.into());
        }

        tracing::debug!(url = %self.inner.url, "Opening WebSocket connection");

        // Stored before the handshake so close() can abort it
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        *self.inner.shutdown_tx.lock() = Some(shutdown_tx);

        let handshake = tokio::select! {
            result = connect_async(self.inner.url.as_str()) => result,
            _ = &mut shutdown_rx => {
                tracing::debug!(url = %self.inner.url, "Handshake aborted by close");
                self.inner.set_state(ConnectionState::Closed);
                return Err(ProtocolError::ClosedDuringHandshake.into());
            }
        };

        let stream = match handshake {
            Ok((stream, _response)) => stream,
            Err(e) => {
                tracing::warn!(url = %self.inner.url, error = %e, "WebSocket handshake failed");
                self.inner.shutdown_tx.lock().take();
                self.inner.set_state(ConnectionState::Closed);
                return Err(ProtocolError::WebSocket(e).into());
            }
        };

        self.inner.set_state(ConnectionState::Open);
        tracing::info!(url = %self.inner.url, "WebSocket connection open");

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.run(stream, shutdown_rx).await;
        });

        Ok(())
    }

    /// Closes the connection and waits until the relay is `Closed`.
    ///
    /// A handshake in progress is aborted. No reconnection follows. Does
    /// nothing if the relay is `Idle` or already `Closed`.
    pub async fn close(&self) {
        let Some(shutdown_tx) = self.inner.shutdown_tx.lock().take() else {
            return;
        };

        let mut state_rx = self.inner.state_tx.subscribe();
        if shutdown_tx.send(()).is_ok() {
            // The state sender lives in `inner`, so this cannot fail
            let _ = state_rx.wait_for(|state| !state.is_live()).await;
        }
    }
}

impl RelayInner {
    fn set_state(&self, state: ConnectionState) {
        let previous = self.state_tx.send_replace(state);
        if previous != state {
            tracing::debug!(from = ?previous, to = ?state, "Relay state changed");
        }
    }

    /// Decodes one frame and dispatches it to the observers.
    fn dispatch_frame(&self, payload: &[u8]) {
        match InboundEvent::from_slice(payload) {
            Ok(event) => {
                let delivered = self.observers.dispatch(&event);
                tracing::trace!(delivered, "Dispatched inbound event");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed frame");
            }
        }
    }

    /// Drives the connection until shutdown or until reconnection gives up.
    async fn run(&self, mut stream: WsStream, mut shutdown_rx: oneshot::Receiver<()>) {
        loop {
            match self.read_frames(&mut stream, &mut shutdown_rx).await {
                LoopExit::Shutdown => {
                    if let Err(e) = stream.send(Message::Close(None)).await {
                        tracing::debug!(error = %e, "Failed to send close frame");
                    }
                    break;
                }
                LoopExit::Disconnected => {
                    tracing::info!(url = %self.url, "WebSocket connection closed");
                }
            }

            match self.reconnect(&mut shutdown_rx).await {
                Some(new_stream) => stream = new_stream,
                None => break,
            }
        }

        self.shutdown_tx.lock().take();
        self.set_state(ConnectionState::Closed);
    }

    async fn read_frames(
        &self,
        stream: &mut WsStream,
        shutdown_rx: &mut oneshot::Receiver<()>,
    ) -> LoopExit {
        loop {
            let frame = tokio::select! {
                _ = &mut *shutdown_rx => return LoopExit::Shutdown,
                frame = stream.next() => frame,
            };

            match frame {
                Some(Ok(Message::Text(text))) => self.dispatch_frame(text.as_bytes()),
                Some(Ok(Message::Binary(bytes))) => self.dispatch_frame(&bytes),
                Some(Ok(Message::Close(close_frame))) => {
                    tracing::debug!(?close_frame, "Server closed the connection");
                    return LoopExit::Disconnected;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "WebSocket read failed");
                    return LoopExit::Disconnected;
                }
                None => return LoopExit::Disconnected,
            }
        }
    }

    /// Attempts to reconnect according to the policy.
    ///
    /// Returns `None` when the policy gives up or shutdown is requested.
    async fn reconnect(&self, shutdown_rx: &mut oneshot::Receiver<()>) -> Option<WsStream> {
        let mut attempt: u32 = 0;

        while self.reconnection.should_retry(attempt) {
            let delay = self.reconnection.delay_for_attempt(attempt);
            attempt += 1;
            self.set_state(ConnectionState::Reconnecting { attempt });
            tracing::info!(attempt, delay = ?delay, "Scheduling reconnection");

            tokio::select! {
                _ = &mut *shutdown_rx => return None,
                () = tokio::time::sleep(delay) => {}
            }

            let result = tokio::select! {
                _ = &mut *shutdown_rx => return None,
                result = connect_async(self.url.as_str()) => result,
            };

            match result {
                Ok((stream, _response)) => {
                    self.set_state(ConnectionState::Open);
                    tracing::info!(url = %self.url, attempt, "WebSocket connection reopened");
                    return Some(stream);
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Reconnection attempt failed");
                }
            }
        }

        if self.reconnection.enabled {
            tracing::warn!(attempts = attempt, "Giving up reconnecting");
        }
        None
    }
}

impl fmt::Debug for EventRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRelay")
            .field("url", &self.inner.url)
            .field("state", &self.state())
            .field("observers", &self.inner.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_relay_is_idle() {
        let relay = EventRelay::new("ws://localhost:8080/ws");
        assert_eq!(relay.state(), ConnectionState::Idle);
        assert_eq!(relay.url(), "ws://localhost:8080/ws");
        assert!(!relay.reconnection().enabled);
    }

    #[test]
    fn live_states() {
        assert!(ConnectionState::Connecting.is_live());
        assert!(ConnectionState::Open.is_live());
        assert!(ConnectionState::Reconnecting { attempt: 1 }.is_live());
        assert!(!ConnectionState::Idle.is_live());
        assert!(!ConnectionState::Closed.is_live());
        assert!(ConnectionState::Open.is_open());
    }

    #[test]
    fn clones_share_observers() {
        let relay = EventRelay::new("ws://localhost/ws");
        let clone = relay.clone();

        let id = relay.register(|_| {});
        assert_eq!(clone.observer_count(), 1);
        assert!(clone.unsubscribe(id));
        assert_eq!(relay.observer_count(), 0);
    }

    #[tokio::test]
    async fn close_without_connection_is_noop() {
        let relay = EventRelay::new("ws://localhost/ws");
        relay.close().await;
        assert_eq!(relay.state(), ConnectionState::Idle);
    }

    #[tokio::test]
    async fn failed_handshake_leaves_relay_closed() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let relay = EventRelay::new(format!("ws://{addr}/ws"));
        let err = relay.connect().await.unwrap_err();

        assert!(matches!(err, Error::Protocol(ProtocolError::WebSocket(_))));
        assert_eq!(relay.state(), ConnectionState::Closed);
    }

    #[tokio::test]
    async fn invalid_url_is_rejected() {
        let relay = EventRelay::new("not a url");
        assert!(relay.connect().await.is_err());
        assert_eq!(relay.state(), ConnectionState::Closed);
    }
}

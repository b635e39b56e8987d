use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Create a channel that carries screen events back to the interactive side
pub fn event_channel<E>() -> (EventSender<E>, mpsc::UnboundedReceiver<E>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, rx)
}

/// Delivers the results of background work to a screen as events
///
/// Once the screen drops its receiver, results still in flight are
/// discarded on delivery.
pub struct EventSender<E> {
    tx: mpsc::UnboundedSender<E>,
}

impl<E> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E: Send + 'static> EventSender<E> {
    /// Run `work` in the background and deliver its output
    pub fn spawn<F>(&self, work: F) -> JoinHandle<()>
    where
        F: Future<Output = E> + Send + 'static,
    {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = work.await;
            if tx.send(event).is_err() {
                tracing::debug!("Screen closed before delivery, discarding result");
            }
        })
    }

    /// Deliver an event immediately
    pub fn send(&self, event: E) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

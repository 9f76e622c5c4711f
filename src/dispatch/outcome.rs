//! Dual-mode dispatch
//!
//! A dispatched call settles exactly once. The settlement is observed through
//! two independent channels: an optional error-first [`Callback`] and the
//! returned [`Outcome`] future. Both read the same settled value; the callback
//! runs first, then the outcome becomes ready.
//!
//! Dispatch is eager. The transport call is spawned on the ambient tokio
//! runtime as soon as [`dispatch`] returns, so a caller that only passes a
//! callback may drop the outcome without cancelling the request.

use crate::error::{Error, Result, ValidationError};
use futures::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// Error-first completion callback: `(error, result)`.
///
/// Exactly one of the two arguments is `Some`.
pub type Callback<T> = Box<dyn FnOnce(Option<&Error>, Option<&T>) + Send + 'static>;

/// Box a closure as a [`Callback`]
pub fn callback<T, F>(f: F) -> Callback<T>
where
    F: FnOnce(Option<&Error>, Option<&T>) + Send + 'static,
{
    Box::new(f)
}

/// The awaitable side of a dispatched call.
pub struct Outcome<T> {
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T> Future for Outcome<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.receiver
            .poll_unpin(cx)
            .map(|settled| settled.unwrap_or_else(|_| Err(Error::Canceled)))
    }
}

/// Settle a call: notify the callback, then complete the outcome.
fn settle<T>(result: Result<T>, callback: Option<Callback<T>>, sender: oneshot::Sender<Result<T>>) {
    if let Some(callback) = callback {
        match &result {
            Ok(value) => callback(None, Some(value)),
            Err(error) => callback(Some(error), None),
        }
    }
    // The outcome may already be gone; the callback has seen the result
    let _ = sender.send(result);
}

fn settled<T>(result: Result<T>, callback: Option<Callback<T>>) -> Outcome<T> {
    let (sender, receiver) = oneshot::channel();
    settle(result, callback, sender);
    Outcome { receiver }
}

/// Run `thunk` on the current runtime and deliver its result to both channels.
///
/// Transport errors are passed through as [`Error::Transport`]. Outside of a
/// tokio runtime the call settles immediately with [`Error::NoRuntime`].
pub fn dispatch<T, F, Fut>(thunk: F, callback: Option<Callback<T>>) -> Outcome<T>
where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
{
    let Ok(handle) = Handle::try_current() else {
        return settled(Err(Error::NoRuntime), callback);
    };

    let (sender, receiver) = oneshot::channel();
    handle.spawn(async move {
        let result = thunk().await.map_err(Error::Transport);
        settle(result, callback, sender);
    });

    Outcome { receiver }
}

/// Settle a call as failed without doing any work.
///
/// The callback, if any, is invoked before this returns and the outcome is
/// already ready.
pub fn reject<T>(error: impl Into<ValidationError>, callback: Option<Callback<T>>) -> Outcome<T> {
    settled(Err(Error::Validation(error.into())), callback)
}

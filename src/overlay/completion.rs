// SPDX-License-Identifier: MPL-2.0
//! Single-shot completion signals for timer-driven operations.
//!
//! Every operation that finishes when a timer fires returns a
//! [`Completion`]. The matching [`Resolver`] travels with the timer action.
//! When the timer fires the resolver is resolved. When the action is
//! displaced or canceled the resolver is dropped, and dropping an unsettled
//! resolver settles the completion as [`Error::Preempted`]. No completion is
//! ever left pending forever.

use crate::error::{Error, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Creates a connected resolver/completion pair.
#[must_use]
pub fn pair<T>() -> (Resolver<T>, Completion<T>) {
    let (tx, rx) = oneshot::channel();
    (
        Resolver { tx: Some(tx) },
        Completion {
            state: State::Waiting(rx),
        },
    )
}

/// Settling side of a [`Completion`].
#[derive(Debug)]
pub struct Resolver<T> {
    tx: Option<oneshot::Sender<Result<T>>>,
}

impl<T> Resolver<T> {
    /// Settles the completion successfully.
    pub fn resolve(mut self, value: T) {
        self.send(Ok(value));
    }

    /// Settles the completion with an error.
    pub fn reject(mut self, err: Error) {
        self.send(Err(err));
    }

    fn send(&mut self, outcome: Result<T>) {
        if let Some(tx) = self.tx.take() {
            // The caller may have dropped its completion; nothing to report then.
            let _ = tx.send(outcome);
        }
    }
}

impl<T> Drop for Resolver<T> {
    fn drop(&mut self) {
        self.send(Err(Error::Preempted));
    }
}

#[derive(Debug)]
enum State<T> {
    Waiting(oneshot::Receiver<Result<T>>),
    Ready(Result<T>),
    Taken,
}

/// Outcome of a timer-driven operation, observable exactly once.
///
/// Await it from async code, or poll it with [`Completion::try_take`] from
/// a synchronous event loop.
#[derive(Debug)]
#[must_use = "a completion reports whether the operation settled or was preempted"]
pub struct Completion<T> {
    state: State<T>,
}

// The value is only ever moved out, never pinned.
impl<T> Unpin for Completion<T> {}

impl<T> Completion<T> {
    /// A completion that has already failed, used when an operation is
    /// rejected before any timer is scheduled.
    pub fn rejected(err: Error) -> Self {
        Self {
            state: State::Ready(Err(err)),
        }
    }

    /// A completion that has already succeeded.
    pub fn ready(value: T) -> Self {
        Self {
            state: State::Ready(Ok(value)),
        }
    }

    /// Takes the outcome if the operation has settled.
    ///
    /// Returns `None` while the operation is still pending and on every call
    /// after the outcome has been taken.
    pub fn try_take(&mut self) -> Option<Result<T>> {
        match std::mem::replace(&mut self.state, State::Taken) {
            State::Waiting(mut rx) => match rx.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(oneshot::error::TryRecvError::Empty) => {
                    self.state = State::Waiting(rx);
                    None
                }
                Err(oneshot::error::TryRecvError::Closed) => Some(Err(Error::Preempted)),
            },
            State::Ready(outcome) => Some(outcome),
            State::Taken => None,
        }
    }
}

impl<T> Future for Completion<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let State::Waiting(rx) = &mut this.state {
            let outcome = match Pin::new(rx).poll(cx) {
                Poll::Ready(received) => received.unwrap_or(Err(Error::Preempted)),
                Poll::Pending => return Poll::Pending,
            };
            this.state = State::Taken;
            return Poll::Ready(outcome);
        }

        match std::mem::replace(&mut this.state, State::Taken) {
            State::Ready(outcome) => Poll::Ready(outcome),
            State::Taken => panic!("Completion polled after it settled"),
            State::Waiting(_) => unreachable!("waiting state is handled above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_until_resolved() {
        let (resolver, mut completion) = pair::<u32>();
        assert!(completion.try_take().is_none());

        resolver.resolve(7);
        assert_eq!(completion.try_take(), Some(Ok(7)));
    }

    #[test]
    fn outcome_is_observable_once() {
        let (resolver, mut completion) = pair::<()>();
        resolver.resolve(());
        assert_eq!(completion.try_take(), Some(Ok(())));
        assert_eq!(completion.try_take(), None);
    }

    #[test]
    fn dropped_resolver_settles_as_preempted() {
        let (resolver, mut completion) = pair::<()>();
        drop(resolver);
        assert_eq!(completion.try_take(), Some(Err(Error::Preempted)));
    }

    #[test]
    fn rejected_completion_carries_error() {
        let mut completion = Completion::<()>::rejected(Error::Config("x".into()));
        assert_eq!(completion.try_take(), Some(Err(Error::Config("x".into()))));
    }

    #[test]
    fn reject_settles_with_error() {
        let (resolver, mut completion) = pair::<()>();
        resolver.reject(Error::Preempted);
        assert!(completion.try_take().unwrap().unwrap_err().is_preempted());
    }

    #[test]
    fn resolving_after_completion_dropped_is_harmless() {
        let (resolver, completion) = pair::<u8>();
        drop(completion);
        resolver.resolve(1);
    }

    #[tokio::test]
    async fn awaits_resolution() {
        let (resolver, completion) = pair::<&'static str>();
        tokio::spawn(async move { resolver.resolve("done") });
        assert_eq!(completion.await, Ok("done"));
    }

    #[tokio::test]
    async fn awaits_ready_value() {
        assert_eq!(Completion::ready(3).await, Ok(3));
    }

    #[tokio::test]
    async fn awaiting_preempted_completion_reports_preempted() {
        let (resolver, completion) = pair::<()>();
        drop(resolver);
        assert_eq!(completion.await, Err(Error::Preempted));
    }
}

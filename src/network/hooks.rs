// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP extension points
//!
//! The host client calls [`HttpHooks::pre_send`] before every outbound call
//! and [`HttpHooks::after_complete`] once it finishes. Hooks run
//! synchronously on the caller's stack.

use std::sync::Arc;

use super::event::{Outcome, Preempt};
use crate::http::RequestArgs;

/// Observer attached to the host HTTP layer.
///
/// # Example
///
/// ```rust
/// use dhl_api_logger::http::RequestArgs;
/// use dhl_api_logger::network::{HttpHooks, Outcome};
///
/// struct Counter(std::sync::atomic::AtomicUsize);
///
/// impl HttpHooks for Counter {
///     fn after_complete(
///         &self,
///         _outcome: &Outcome,
///         _request_type: &str,
///         _transport: &str,
///         _args: &RequestArgs,
///         _url: &str,
///     ) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///     }
/// }
/// ```
pub trait HttpHooks: Send + Sync {
    /// Called before a request is sent.
    ///
    /// Returning anything other than [`Preempt::Proceed`] short-circuits
    /// the call.
    fn pre_send(&self, preempt: Preempt, _args: &RequestArgs, _url: &str) -> Preempt {
        preempt
    }

    /// Called after a request finished, successfully or not
    fn after_complete(
        &self,
        _outcome: &Outcome,
        _request_type: &str,
        _transport: &str,
        _args: &RequestArgs,
        _url: &str,
    ) {
    }

    /// Priority - higher priority hooks run first
    fn priority(&self) -> i32 {
        0
    }
}

impl<H: HttpHooks + ?Sized> HttpHooks for Arc<H> {
    fn pre_send(&self, preempt: Preempt, args: &RequestArgs, url: &str) -> Preempt {
        (**self).pre_send(preempt, args, url)
    }

    fn after_complete(
        &self,
        outcome: &Outcome,
        request_type: &str,
        transport: &str,
        args: &RequestArgs,
        url: &str,
    ) {
        (**self).after_complete(outcome, request_type, transport, args, url)
    }

    fn priority(&self) -> i32 {
        (**self).priority()
    }
}

/// Hook chain - dispatches both extension points to every registered hook
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn HttpHooks>>,
}

impl HookChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Add a hook
    pub fn add<H: HttpHooks + 'static>(&mut self, hook: H) {
        self.add_shared(Arc::new(hook));
    }

    /// Add a hook that is also held elsewhere
    pub fn add_shared(&mut self, hook: Arc<dyn HttpHooks>) {
        self.hooks.push(hook);
        // Stable sort keeps registration order among equal priorities
        self.hooks.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Fold the pre-send signal through every hook
    pub fn pre_send(&self, args: &RequestArgs, url: &str) -> Preempt {
        self.hooks
            .iter()
            .fold(Preempt::Proceed, |preempt, hook| hook.pre_send(preempt, args, url))
    }

    /// Notify every hook of a finished call
    pub fn after_complete(
        &self,
        outcome: &Outcome,
        request_type: &str,
        transport: &str,
        args: &RequestArgs,
        url: &str,
    ) {
        for hook in &self.hooks {
            hook.after_complete(outcome, request_type, transport, args, url);
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::TransportError;
    use parking_lot::Mutex;

    struct Blocker;

    impl HttpHooks for Blocker {
        fn pre_send(&self, _preempt: Preempt, _args: &RequestArgs, url: &str) -> Preempt {
            Preempt::Fail(TransportError::new("blocked", url))
        }

        fn priority(&self) -> i32 {
            100
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Preempt>>,
        completed: Mutex<Vec<String>>,
    }

    impl HttpHooks for Recorder {
        fn pre_send(&self, preempt: Preempt, _args: &RequestArgs, _url: &str) -> Preempt {
            self.seen.lock().push(preempt.clone());
            preempt
        }

        fn after_complete(
            &self,
            _outcome: &Outcome,
            request_type: &str,
            transport: &str,
            _args: &RequestArgs,
            url: &str,
        ) {
            self.completed
                .lock()
                .push(format!("{request_type}/{transport}/{url}"));
        }
    }

    #[test]
    fn test_empty_chain_proceeds() {
        let chain = HookChain::new();
        assert!(chain.is_empty());
        assert!(chain.pre_send(&RequestArgs::new(), "https://example.com").is_proceed());
    }

    #[test]
    fn test_priority_order_threads_signal() {
        let recorder = Arc::new(Recorder::default());
        let mut chain = HookChain::new();
        chain.add_shared(recorder.clone());
        chain.add(Blocker);
        assert_eq!(chain.len(), 2);

        let signal = chain.pre_send(&RequestArgs::new(), "https://example.com");

        // Blocker runs first, so the recorder sees its signal
        assert!(matches!(signal, Preempt::Fail(ref e) if e.code == "blocked"));
        let seen = recorder.seen.lock();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], Preempt::Fail(_)));
    }

    #[test]
    fn test_after_complete_notifies_all() {
        let first = Arc::new(Recorder::default());
        let second = Arc::new(Recorder::default());
        let mut chain = HookChain::new();
        chain.add_shared(first.clone());
        chain.add_shared(second.clone());

        let outcome = Outcome::Failure(TransportError::new("timeout", "slow"));
        chain.after_complete(&outcome, "response", "reqwest", &RequestArgs::new(), "u");

        assert_eq!(first.completed.lock().as_slice(), ["response/reqwest/u"]);
        assert_eq!(second.completed.lock().len(), 1);
    }
}

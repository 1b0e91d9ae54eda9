//! Loading-indicator lifecycle.
//!
//! Every export invocation mints one token, pushes it when work starts and
//! resolves it when work settles. The pairing is enforced with a guard so the
//! resolve side runs on every exit path, including unwinds out of
//! notification emission.

use std::fmt;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Correlation key between a "loading started" and a "loading resolved" event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadingToken(Uuid);

impl LoadingToken {
    /// Mints a token unique to one invocation.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LoadingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registry the host uses to show and hide its loading indicator.
pub trait LoadingRegistry: Send + Sync {
    fn push(&self, token: LoadingToken);

    fn resolve(&self, token: LoadingToken);
}

/// Pushes a token on construction and resolves it exactly once on drop.
pub struct LoadingGuard {
    registry: Arc<dyn LoadingRegistry>,
    token: LoadingToken,
}

impl LoadingGuard {
    pub fn arm(registry: Arc<dyn LoadingRegistry>, token: LoadingToken) -> Self {
        registry.push(token);
        Self { registry, token }
    }

    pub fn token(&self) -> LoadingToken {
        self.token
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.registry.resolve(self.token);
    }
}

/// In-crate registry for hosts without their own loading-event plumbing.
///
/// The indicator is considered visible while any token is pending.
#[derive(Default)]
pub struct GlobalLoadingQueue {
    pending: Mutex<Vec<LoadingToken>>,
}

impl GlobalLoadingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.lock_pending().is_empty()
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Vec<LoadingToken>> {
        // Tokens are plain ids, so a poisoned queue is still usable.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LoadingRegistry for GlobalLoadingQueue {
    fn push(&self, token: LoadingToken) {
        self.lock_pending().push(token);
    }

    fn resolve(&self, token: LoadingToken) {
        self.lock_pending().retain(|pending| *pending != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_per_mint() {
        assert_ne!(LoadingToken::fresh(), LoadingToken::fresh());
    }

    #[test]
    fn guard_pushes_on_arm_and_resolves_on_drop() {
        let queue = Arc::new(GlobalLoadingQueue::new());
        let token = LoadingToken::fresh();

        let guard = LoadingGuard::arm(Arc::clone(&queue) as Arc<dyn LoadingRegistry>, token);
        assert!(!queue.is_idle());
        assert_eq!(guard.token(), token);

        drop(guard);
        assert!(queue.is_idle());
    }

    #[test]
    fn guard_resolves_during_unwind() {
        let queue = Arc::new(GlobalLoadingQueue::new());
        let queue_for_panic = Arc::clone(&queue);

        let result = std::panic::catch_unwind(move || {
            let _guard = LoadingGuard::arm(
                queue_for_panic as Arc<dyn LoadingRegistry>,
                LoadingToken::fresh(),
            );
            panic!("notification sink blew up");
        });

        assert!(result.is_err());
        assert!(queue.is_idle());
    }

    #[test]
    fn queue_resolves_only_the_given_token() {
        let queue = GlobalLoadingQueue::new();
        let first = LoadingToken::fresh();
        let second = LoadingToken::fresh();

        queue.push(first);
        queue.push(second);
        queue.resolve(first);

        assert!(!queue.is_idle());
        queue.resolve(second);
        assert!(queue.is_idle());
    }
}

//! Cooperative cancellation for animated runs
//!
//! A [`CancelToken`] is owned by each mount. Long-running animations (the
//! bubble sort run) hold a child token and check it before every step, so
//! remounting the engine or restarting a run stops pending steps without any
//! shared mutable buffer access.

use std::cell::Cell;
use std::rc::Rc;

/// Single-threaded cancellation flag with optional parent linkage
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Rc<TokenInner>,
}

#[derive(Debug, Default)]
struct TokenInner {
    cancelled: Cell<bool>,
    parent: Option<CancelToken>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token that is cancelled when either it or `self` is cancelled
    pub fn child_token(&self) -> CancelToken {
        CancelToken {
            inner: Rc::new(TokenInner {
                cancelled: Cell::new(false),
                parent: Some(self.clone()),
            }),
        }
    }

    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
            || self
                .inner
                .parent
                .as_ref()
                .is_some_and(|parent| parent.is_cancelled())
    }
}

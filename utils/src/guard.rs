//! Run a closure when leaving a scope.

/// Runs a closure exactly once when dropped, unless dismissed.
///
/// ```
/// use qtils::defer;
/// use std::cell::Cell;
///
/// let closed = Cell::new(false);
/// {
///     let _guard = defer(|| closed.set(true));
///     assert!(!closed.get());
/// }
/// assert!(closed.get());
/// ```
#[must_use = "the closure runs immediately if the guard is not bound"]
pub struct FinalAction<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> FinalAction<F> {
    /// Creates a guard that runs `action` on drop.
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Consumes the guard without running its closure.
    pub fn dismiss(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for FinalAction<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Shorthand for [FinalAction::new].
pub fn defer<F: FnOnce()>(action: F) -> FinalAction<F> {
    FinalAction::new(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, panic};

    #[test]
    fn test_runs_once_on_drop() {
        let calls = RefCell::new(0);
        {
            let _guard = FinalAction::new(|| *calls.borrow_mut() += 1);
            assert_eq!(*calls.borrow(), 0);
        }
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_dismiss() {
        let calls = RefCell::new(0);
        let guard = defer(|| *calls.borrow_mut() += 1);
        guard.dismiss();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_reverse_order() {
        let order = RefCell::new(Vec::new());
        {
            let _first = defer(|| order.borrow_mut().push(1));
            let _second = defer(|| order.borrow_mut().push(2));
        }
        assert_eq!(*order.borrow(), vec![2, 1]);
    }

    #[test]
    fn test_moved_guard_runs_once() {
        let calls = RefCell::new(0);
        let guard = defer(|| *calls.borrow_mut() += 1);
        let moved = guard;
        drop(moved);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_runs_on_unwind() {
        let flag = std::sync::atomic::AtomicBool::new(false);
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _guard = defer(|| flag.store(true, std::sync::atomic::Ordering::SeqCst));
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(flag.load(std::sync::atomic::Ordering::SeqCst));
    }
}

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    runtime: Option<RuntimeHandle>,
}

/// Observable single-threaded value.
///
/// Every write bumps [`MutableState::version`] and, when the state was
/// created with a runtime, marks that runtime as needing a frame.
pub struct MutableState<T> {
    inner: Rc<StateCell<T>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self::build(value, None)
    }

    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self::build(value, Some(runtime))
    }

    fn build(value: T, runtime: Option<RuntimeHandle>) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
                runtime,
            }),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn set_value(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.value.borrow_mut());
        self.notify();
        result
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    fn notify(&self) {
        self.inner.version.set(self.inner.version.get() + 1);
        if let Some(runtime) = &self.inner.runtime {
            runtime.mark_state_changed();
        }
    }
}

impl<T: Clone> MutableState<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    inner: Rc<StateCell<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;

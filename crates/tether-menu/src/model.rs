//! Two-way binding adapter.
//!
//! A component that edits a value owned by its parent reads the parent's
//! value and, on write, emits an `input` notification instead of mutating
//! it. The parent decides whether to feed the new value back via
//! [`Model::sync`].

use std::fmt;

/// Change notification emitted by [`Model::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent<T> {
    /// The component wants the external value to become `T`.
    Input(T),
}

impl<T> ModelEvent<T> {
    /// Event name as seen by listeners that dispatch on strings.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
        }
    }
}

type Listener<T> = Box<dyn FnMut(&ModelEvent<T>)>;

/// A controlled proxy of an externally supplied value.
pub struct Model<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

impl<T> Model<T> {
    /// Wrap the current external value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    /// The external value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Emit [`ModelEvent::Input`] carrying `value`. The held value is left
    /// unchanged until the owner calls [`Self::sync`].
    pub fn set(&mut self, value: T) {
        let event = ModelEvent::Input(value);
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// The owner supplies a new external value.
    pub fn sync(&mut self, value: T) {
        self.value = value;
    }

    /// Register a change listener.
    pub fn on_change(&mut self, listener: impl FnMut(&ModelEvent<T>) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl<T: fmt::Debug> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

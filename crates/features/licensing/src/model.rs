//! Observable holder of the current selection.
//!
//! Dependent views subscribe to [`LicenseEvent`]s. Each committed change publishes exactly
//! one event; a change that leaves the state as it was publishes nothing.

use cstudio_domain::SelectionState;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::trace;

/// A safe default for the event buffer; views drain it synchronously after every change.
const DEFAULT_CAPACITY: usize = 64;
const MIN_CAPACITY: usize = 1;

/// Change notifications published by [`LicenseModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseEvent {
    /// A license type was (re)selected; options were reset.
    TypeChanged { state: SelectionState },
    /// One option of the current type changed.
    OptionsChanged { state: SelectionState },
}

impl LicenseEvent {
    /// The state after the change.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        match self {
            Self::TypeChanged { state } | Self::OptionsChanged { state } => state,
        }
    }
}

#[derive(Debug)]
pub struct LicenseModel {
    state: SelectionState,
    events: broadcast::Sender<Arc<LicenseEvent>>,
}

impl LicenseModel {
    #[must_use]
    pub fn new(state: SelectionState) -> Self {
        Self::with_capacity(state, DEFAULT_CAPACITY)
    }

    /// Creates a model whose subscribers buffer up to `capacity` unread events.
    #[must_use]
    pub fn with_capacity(state: SelectionState, capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(MIN_CAPACITY));
        Self { state, events }
    }

    #[must_use]
    pub const fn get(&self) -> &SelectionState {
        &self.state
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Arc<LicenseEvent>> {
        self.events.subscribe()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.events.receiver_count()
    }

    /// Replaces the whole selection (type change). Returns `false` if nothing changed.
    pub fn replace(&mut self, state: SelectionState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.publish(LicenseEvent::TypeChanged { state: self.state.clone() });
        true
    }

    /// Commits new option values for the current type. Returns `false` if nothing changed.
    pub fn commit_options(&mut self, state: SelectionState) -> bool {
        debug_assert_eq!(self.state.license_type, state.license_type);
        if self.state == state {
            return false;
        }
        self.state = state;
        self.publish(LicenseEvent::OptionsChanged { state: self.state.clone() });
        true
    }

    fn publish(&self, event: LicenseEvent) {
        // Having no observers is fine; the state is still committed.
        match self.events.send(Arc::new(event)) {
            Ok(receivers) => trace!(receivers, "License change published"),
            Err(_) => trace!("License change published without observers"),
        }
    }
}

use crate::push::{HeadingUpdate, PushError};

/// Ticks counted by one view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn value(&self) -> u64 {
        self.value
    }

    fn increment(&mut self) -> u64 {
        self.value += 1;
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Stopped,
    Running,
}

/// A heading whose text carries the number of ticks seen while attached.
#[derive(Debug, Clone)]
pub struct TickingCounterView {
    label: String,
    heading: String,
    counter: Counter,
    state: ViewState,
}

impl TickingCounterView {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            heading: label.clone(),
            label,
            counter: Counter::default(),
            state: ViewState::Stopped,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn value(&self) -> u64 {
        self.counter.value()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn attach(&mut self) {
        self.state = ViewState::Running;
    }

    pub fn detach(&mut self) {
        self.state = ViewState::Stopped;
    }

    /// Advances the counter and returns the update to push.
    ///
    /// A detached view refuses the tick and stays as it is, so the value
    /// observed at detach time is final.
    pub fn tick(&mut self) -> Result<HeadingUpdate, PushError> {
        if self.state == ViewState::Stopped {
            return Err(PushError::Detached);
        }
        let value = self.counter.increment();
        self.heading = format!("{} ({})", self.label, value);
        Ok(HeadingUpdate {
            heading: self.heading.clone(),
            value,
        })
    }
}

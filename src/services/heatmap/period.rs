//! Period change notifications.
//!
//! The reporter hands the resolved period to a host callback once per
//! bucketization. It never reads anything back; a missing or panicking
//! listener leaves the computation untouched.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::models::bucket::Period;

pub type PeriodListener = Box<dyn FnMut(Period)>;

#[derive(Default)]
pub struct PeriodReporter {
    listener: Option<PeriodListener>,
    last_reported: Option<Period>,
    failures: usize,
}

impl PeriodReporter {
    /// A reporter with no listener attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener<F>(listener: F) -> Self
    where
        F: FnMut(Period) + 'static,
    {
        Self {
            listener: Some(Box::new(listener)),
            ..Self::default()
        }
    }

    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Period) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Deliver `period` to the listener, if any.
    pub fn report(&mut self, period: Period) {
        self.last_reported = Some(period);
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        if catch_unwind(AssertUnwindSafe(|| listener(period))).is_err() {
            self.failures += 1;
            log::warn!(
                "Period listener panicked while handling {} to {}; continuing",
                period.start,
                period.end
            );
        }
    }

    /// The most recent period passed to [`report`](Self::report).
    pub fn last_reported(&self) -> Option<Period> {
        self.last_reported
    }

    /// How many deliveries ended in a listener panic.
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl std::fmt::Debug for PeriodReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodReporter")
            .field("has_listener", &self.listener.is_some())
            .field("last_reported", &self.last_reported)
            .field("failures", &self.failures)
            .finish()
    }
}

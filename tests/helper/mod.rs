//! Shared test fixtures

use std::sync::{Arc, Mutex};

use update_check::{CheckResult, DisplaySurface};

/// Surface that records every presentation it receives
pub struct RecordingSurface {
    valid: bool,
    presented: Mutex<Vec<CheckResult>>,
}

impl RecordingSurface {
    pub fn new(valid: bool) -> Arc<Self> {
        Arc::new(Self {
            valid,
            presented: Mutex::new(Vec::new()),
        })
    }

    pub fn presented(&self) -> Vec<CheckResult> {
        self.presented.lock().unwrap().clone()
    }
}

impl DisplaySurface for RecordingSurface {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn present(&self, result: &CheckResult) {
        self.presented.lock().unwrap().push(result.clone());
    }
}

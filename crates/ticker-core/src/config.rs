//! Configuration source
//!
//! Implementation selectors live in process-wide environment variables. They
//! are read on demand, never cached, so a changed value takes effect on the
//! next resolution.

use std::collections::HashMap;

/// Read-only key/value configuration
pub trait Environment: Send + Sync {
    /// Value for `key`, if set
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

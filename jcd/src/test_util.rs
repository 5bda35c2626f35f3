//! Test utilities shared by unit tests.
//!
//! Tests that touch process environment variables must also be marked
//! `#[serial]`; the guard only restores values, it does not lock.

use std::env;
use std::ffi::{OsStr, OsString};

/// Sets or clears environment variables and restores them on drop.
#[derive(Default)]
pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl EnvGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn remember(&mut self, key: &'static str) {
        if !self.saved.iter().any(|(k, _)| *k == key) {
            self.saved.push((key, env::var_os(key)));
        }
    }

    pub(crate) fn set(mut self, key: &'static str, value: impl AsRef<OsStr>) -> Self {
        self.remember(key);
        env::set_var(key, value);
        self
    }

    pub(crate) fn unset(mut self, key: &'static str) -> Self {
        self.remember(key);
        env::remove_var(key);
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

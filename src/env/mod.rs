//! Process environment access
//!
//! Commands never touch `std::env` directly. They go through
//! [`EnvironmentPort`] so tests can hand in a [`MemoryEnv`].

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::utils::strings::truncate_value;

/// Read and remove access to an environment
pub trait EnvironmentPort {
    /// Name -> value snapshot, ordered by name
    fn snapshot(&self) -> BTreeMap<String, String>;

    fn contains(&self, name: &str) -> bool;

    /// Remove a variable. Only the current process is affected.
    fn remove_var(&self, name: &str);
}

/// The real environment of this process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvironmentPort for ProcessEnv {
    fn snapshot(&self) -> BTreeMap<String, String> {
        // Non-UTF-8 entries can't be printed as KEY=VALUE, skip them
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn contains(&self, name: &str) -> bool {
        is_valid_key(name) && std::env::var_os(name).is_some()
    }

    fn remove_var(&self, name: &str) {
        if is_valid_key(name) {
            std::env::remove_var(name);
        }
    }
}

/// Keys `std::env` accepts without panicking
fn is_valid_key(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

/// In-memory environment for tests
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RefCell<BTreeMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: RefCell::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }
}

impl EnvironmentPort for MemoryEnv {
    fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.borrow().clone()
    }

    fn contains(&self, name: &str) -> bool {
        self.vars.borrow().contains_key(name)
    }

    fn remove_var(&self, name: &str) {
        self.vars.borrow_mut().remove(name);
    }
}

/// Variables whose name contains `filter` (case-insensitive), sorted by name.
pub fn list_vars(env: &dyn EnvironmentPort, filter: Option<&str>) -> Vec<(String, String)> {
    let needle = filter.map(str::to_lowercase);
    env.snapshot()
        .into_iter()
        .filter(|(key, _)| match &needle {
            Some(needle) => key.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}

/// `KEY=VALUE` display line with the value cut to `max_value_width` chars
pub fn display_line(key: &str, value: &str, max_value_width: usize) -> String {
    format!("{}={}", key, truncate_value(value, max_value_width))
}

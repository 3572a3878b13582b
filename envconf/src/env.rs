//! Sources of environment variables

use std::collections::{BTreeMap, HashMap};

/// Key-value lookup consulted by the [`Loader`](crate::Loader).
///
/// [`ProcessEnv`] reads the real process environment. Maps and closures can
/// stand in for it, which keeps tests independent of global state:
///
/// ```rust
/// use std::collections::HashMap;
/// use envconf::Environment;
///
/// let env = HashMap::from([("HOST".to_string(), "localhost".to_string())]);
/// assert_eq!(env.lookup("HOST").as_deref(), Some("localhost"));
/// assert_eq!(env.lookup("PORT"), None);
/// ```
pub trait Environment {
    /// Return the value of `key`, or `None` if it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The current process environment.
///
/// Values that are not valid UTF-8 are converted lossily: invalid sequences
/// become `U+FFFD`, so a `String` field receives the replaced text. A warning
/// naming the key is logged when that happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        let value = std::env::var_os(key)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(key, "Environment value is not valid UTF-8, converting lossily");
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

impl<S: std::hash::BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Environment backed by a closure. Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Use a closure as an [`Environment`].
///
/// ```rust
/// use envconf::env;
/// use envconf::Environment;
///
/// let env = env::from_fn(|key| (key == "DEBUG").then(|| "true".to_string()));
/// assert_eq!(env.lookup("DEBUG").as_deref(), Some("true"));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    FromFn(f)
}

impl<F> Environment for FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

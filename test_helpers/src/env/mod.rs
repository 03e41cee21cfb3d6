//! Helpers for safely mutating the process environment in tests.
//!
//! Constructors such as `EnvTree::new` and `Env::new` read the live process
//! environment, so tests exercising them must not race with each other. Every
//! mutation goes through a global re-entrant mutex, and the returned guards
//! restore the prior state when dropped (removing the variable if it was
//! previously absent).
//!
//! Use [`scoped`] when a test needs a batch of variables present while it
//! builds a snapshot; the returned [`EnvScope`] keeps the lock held until it
//! drops, so no other test can observe or change the batch half-way through.
//!
//! # Examples
//!
//! ```
//! use envtree_test_helpers::env;
//!
//! let _scope = env::scoped(&[("DOC_APP_PORT", "80")]);
//! assert_eq!(std::env::var("DOC_APP_PORT").ok().as_deref(), Some("80"));
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Wrapper around `std::env::set_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_set_var(key: &str, value: &OsStr) {
    unsafe { env::set_var(key, value) };
}

/// Wrapper around `std::env::remove_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_remove_var(key: &str) {
    unsafe { env::remove_var(key) };
}

/// RAII guard restoring an environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: serialised by ENV_MUTEX held above.
            Some(value) => unsafe { env_set_var(&self.key, &value) },
            // SAFETY: serialised by ENV_MUTEX held above.
            None => unsafe { env_remove_var(&self.key) },
        }
    }
}

/// RAII guard that serialises environment access for its lifetime.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets an environment variable while holding the global lock.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        let name = key.into();
        let original = env::var_os(&name);
        // SAFETY: `self` proves ENV_MUTEX is held.
        unsafe { env_set_var(&name, value.as_ref()) };
        EnvVarGuard {
            key: name,
            original,
        }
    }

    /// Removes an environment variable while holding the global lock.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        let name = key.into();
        let original = env::var_os(&name);
        // SAFETY: `self` proves ENV_MUTEX is held.
        unsafe { env_remove_var(&name) };
        EnvVarGuard {
            key: name,
            original,
        }
    }
}

/// Acquires the global environment lock.
///
/// The lock is re-entrant, so guards created through [`set_var`] on the same
/// thread while it is held do not deadlock.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Sets a single environment variable and returns a guard restoring its prior
/// value.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes a single environment variable and returns a guard restoring its
/// prior value.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    lock().remove_var(key)
}

/// Holds the environment lock together with a batch of guards.
///
/// Guards are restored while the lock is still held, in reverse order of
/// creation.
#[must_use = "dropping releases the environment lock and restores guards"]
pub struct EnvScope {
    guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl fmt::Debug for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvScope")
            .field("guards", &self.guards)
            .finish_non_exhaustive()
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Sets every `(key, value)` pair and keeps the environment locked until the
/// returned scope drops.
pub fn scoped(pairs: &[(&str, &str)]) -> EnvScope {
    let held = lock();
    let guards = pairs
        .iter()
        .map(|&(key, value)| held.set_var(key, value))
        .collect();
    EnvScope {
        guards,
        _lock: held,
    }
}

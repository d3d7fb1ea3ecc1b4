//! One-time installation of the shared transport.
//!
//! A [`TransportGuard`] holds at most one [`Transport`] for its whole
//! lifetime. The first installation wins; later ones are ignored with a
//! debug notice. Installation is a compare-and-set on a [`OnceLock`], so
//! concurrent first-time callers agree on a single winner and all observe
//! the same handle.
//!
//! [`global()`] is the process-wide guard behind [`crate::dispatch`] and
//! [`crate::Dispatcher::lazy`]. Applications that construct their own
//! [`crate::Dispatcher`] with an explicit transport never touch it.

use std::sync::{Arc, OnceLock};

use crate::error::TransportError;
use crate::transport::{HttpTransport, Transport};

/// Holds the transport installed by the first successful initialization.
#[derive(Debug, Default)]
pub struct TransportGuard {
    cell: OnceLock<Arc<dyn Transport>>,
}

static GLOBAL: TransportGuard = TransportGuard::new();

/// Returns the process-wide transport guard.
#[must_use]
pub fn global() -> &'static TransportGuard {
    &GLOBAL
}

impl TransportGuard {
    /// Creates an empty guard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Installs `transport` unless one is already installed.
    ///
    /// Returns `true` if this call installed it. A rejected transport is
    /// dropped unused.
    pub fn init(&self, transport: Arc<dyn Transport>) -> bool {
        let installed = self.cell.set(transport).is_ok();
        if !installed {
            #[cfg(feature = "telemetry")]
            tracing::debug!("safecharge transport is already initialized");
        }
        installed
    }

    /// Installs a [`HttpTransport`] with default settings unless a transport
    /// is already installed.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the default client cannot be
    /// built.
    pub fn init_default(&self) -> Result<bool, TransportError> {
        if self.is_initialized() {
            #[cfg(feature = "telemetry")]
            tracing::debug!("safecharge transport is already initialized");
            return Ok(false);
        }
        Ok(self.init(Arc::new(HttpTransport::try_default()?)))
    }

    /// Returns the installed transport, installing one from `factory` first
    /// if the guard is empty.
    ///
    /// `factory` runs only while the guard is empty. If several threads race
    /// here, each may build a candidate, but exactly one is installed and
    /// every caller gets that one.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error; the guard stays empty in that case.
    pub fn get_or_try_init<F>(&self, factory: F) -> Result<Arc<dyn Transport>, TransportError>
    where
        F: FnOnce() -> Result<Arc<dyn Transport>, TransportError>,
    {
        if let Some(transport) = self.cell.get() {
            return Ok(Arc::clone(transport));
        }
        let candidate = factory()?;
        Ok(Arc::clone(self.cell.get_or_init(move || candidate)))
    }

    /// Returns the installed transport, lazily installing the default
    /// [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the default client cannot be
    /// built.
    pub fn get_or_init_default(&self) -> Result<Arc<dyn Transport>, TransportError> {
        self.get_or_try_init(|| {
            let transport: Arc<dyn Transport> = Arc::new(HttpTransport::try_default()?);
            Ok(transport)
        })
    }

    /// Returns the installed transport, if any.
    #[must_use]
    pub fn get(&self) -> Option<Arc<dyn Transport>> {
        self.cell.get().map(Arc::clone)
    }

    /// Returns `true` once a transport has been installed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    /// Replies with a fixed label so tests can tell transports apart.
    #[derive(Debug)]
    struct Labeled(&'static str);

    impl Transport for Labeled {
        fn send(&self, _: &str, _: &str, _: &HeaderMap) -> Result<String, TransportError> {
            Ok(self.0.to_owned())
        }
    }

    fn label(guard: &TransportGuard) -> String {
        guard
            .get()
            .unwrap()
            .send("", "", &HeaderMap::new())
            .unwrap()
    }

    #[test]
    fn first_initialization_wins() {
        let guard = TransportGuard::new();
        assert!(!guard.is_initialized());

        assert!(guard.init(Arc::new(Labeled("A"))));
        assert!(!guard.init(Arc::new(Labeled("B"))));

        assert!(guard.is_initialized());
        assert_eq!(label(&guard), "A");
    }

    #[test]
    fn lazy_init_skips_factory_once_installed() {
        let guard = TransportGuard::new();
        guard.init(Arc::new(Labeled("explicit")));

        let transport = guard
            .get_or_try_init(|| panic!("factory must not run"))
            .unwrap();
        assert_eq!(transport.send("", "", &HeaderMap::new()).unwrap(), "explicit");
    }

    #[test]
    fn failed_factory_leaves_guard_empty() {
        let guard = TransportGuard::new();
        let result = guard.get_or_try_init(|| {
            Err(std::io::Error::other("no TLS backend").into())
        });
        assert!(result.is_err());
        assert!(!guard.is_initialized());

        assert!(guard.init(Arc::new(Labeled("later"))));
        assert_eq!(label(&guard), "later");
    }

    #[test]
    fn init_default_is_a_no_op_when_initialized() {
        let guard = TransportGuard::new();
        guard.init(Arc::new(Labeled("A")));
        assert!(!guard.init_default().unwrap());
        assert_eq!(label(&guard), "A");
    }

    #[test]
    fn concurrent_first_calls_agree_on_one_transport() {
        const THREADS: usize = 16;
        static LABELS: [&str; THREADS] = [
            "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9", "t10", "t11", "t12",
            "t13", "t14", "t15",
        ];

        let guard = Arc::new(TransportGuard::new());
        let barrier = Arc::new(Barrier::new(THREADS));
        let wins = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = LABELS
            .iter()
            .map(|&name| {
                let guard = Arc::clone(&guard);
                let barrier = Arc::clone(&barrier);
                let wins = Arc::clone(&wins);
                thread::spawn(move || {
                    barrier.wait();
                    if guard.init(Arc::new(Labeled(name))) {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                    let late: Arc<dyn Transport> = Arc::new(Labeled("late"));
                    guard
                        .get_or_try_init(|| Ok(late))
                        .unwrap()
                        .send("", "", &HeaderMap::new())
                        .unwrap()
                })
            })
            .collect();

        let seen: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(wins.load(Ordering::SeqCst), 1);
        assert!(seen.iter().all(|s| *s == seen[0]));
        assert_eq!(seen[0], label(&guard));
    }
}

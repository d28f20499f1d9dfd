//! Dispatch timing instrumentation.
//!
//! Pointer moves arrive at display rate, so every dispatch has to stay well
//! inside a frame. With the `profiling` feature enabled each dispatch is
//! wrapped in a [`ScopedTimer`] that warns when it runs slow.
//!
//! ```ignore
//! use boardinput::profile_scope;
//!
//! fn on_move() {
//!     profile_scope!("on_move");
//!     // ... dispatch ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;

use crate::constants::SLOW_DISPATCH_MS;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// RAII timer that logs a warning when its scope outlives the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the default dispatch threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_DISPATCH_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                "{} took {:.2}ms (threshold: {:.2}ms)",
                self.name, elapsed, self.threshold_ms
            );
        }
    }
}

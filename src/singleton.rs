//! Process-wide state created on first access.
//!
//! [`Singleton<T>`] is `static`-friendly: it stores an initializer and builds
//! the value exactly once, even under concurrent first access. Every access
//! goes through a mutex, so writers are serialized as well.
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::OnceCell;
use tracing::debug;

pub struct Singleton<T> {
    cell: OnceCell<Mutex<T>>,
    init: fn() -> T,
}

impl<T> Singleton<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self { cell: OnceCell::new(), init }
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Lock the instance, creating it first if needed.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        let slot = self.cell.get_or_init(|| {
            debug!(ty = std::any::type_name::<T>(), "singleton created");
            Mutex::new((self.init)())
        });
        // a panic while holding the lock leaves plain data behind; keep serving it
        slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// WEATHER STATION
// ————————————————————————————————————————————————————————————————————————————

pub const DEFAULT_WEATHER: &str = "Sunny, 25C";

static WEATHER: Singleton<WeatherReport> = Singleton::new(WeatherReport::initial);

struct WeatherReport(String);

impl WeatherReport {
    fn initial() -> Self { Self(DEFAULT_WEATHER.to_string()) }
}

/// Handle onto the one weather report of the process.
#[derive(Debug, Clone, Copy)]
pub struct WeatherStation {
    _private: (),
}

impl WeatherStation {
    pub fn instance() -> Self {
        // touch the cell so creation happens on first access, not first read
        drop(WEATHER.lock());
        Self { _private: () }
    }

    pub fn weather(&self) -> String {
        WEATHER.lock().0.clone()
    }

    pub fn set_weather(&self, report: impl Into<String>) {
        let report = report.into();
        debug!(%report, "weather updated");
        WEATHER.lock().0 = report;
    }

    /// Address of the shared report, identical for every handle.
    pub fn identity(&self) -> *const () {
        let guard = WEATHER.lock();
        &*guard as *const WeatherReport as *const ()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counted() -> Vec<u8> {
        CALLS.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    }

    #[test]
    fn concurrent_first_access_initializes_once() {
        static SHARED: Singleton<Vec<u8>> = Singleton::new(counted);
        assert!(!SHARED.is_initialized());

        let handles = (0..8u8)
            .map(|i| thread::spawn(move || SHARED.lock().push(i)))
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        let mut seen = SHARED.lock().clone();
        seen.sort();
        assert_eq!(seen, (0..8).collect::<Vec<u8>>());
    }

    #[test]
    fn report_starts_sunny() {
        static FRESH: Singleton<WeatherReport> = Singleton::new(WeatherReport::initial);
        assert!(!FRESH.is_initialized());
        assert_eq!(FRESH.lock().0, "Sunny, 25C");
        assert_eq!(DEFAULT_WEATHER, "Sunny, 25C");
    }

    #[test]
    fn weather_changes_are_visible_through_every_handle() {
        let first = WeatherStation::instance();
        first.set_weather("Cloudy, 18C");

        let second = WeatherStation::instance();
        assert_eq!(second.weather(), "Cloudy, 18C");
        assert_eq!(first.identity(), second.identity());
    }
}

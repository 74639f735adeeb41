//! Core business logic abstractions

pub mod cache;
pub mod clock;
pub mod config;
pub mod currency;
pub mod log;
pub mod rates;
pub mod summary;

// Re-export main types for cleaner imports
pub use cache::{CachedRates, KeyValueSlot, RateCache, StorageError};
pub use currency::{CurrencyRate, RateError, RateProvider};
pub use rates::RateService;

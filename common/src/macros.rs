//! Thin logging macros so callers don't need a `tracing` import of their own.
//!
//! The cli installs a formatter that renders these as `[+]` / `[*]` / `[-]`
//! symbol lines.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

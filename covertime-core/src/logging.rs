//! Logging macros
//!
//! The same call sites log through different backends depending on the
//! build:
//! - Firmware (`defmt` feature): forwards to `defmt`
//! - Host unit tests: prints to stdout
//! - Everything else: arguments are type-checked, nothing is emitted
//!
//! The `cfg` checks are evaluated in the crate that expands the macro, so a
//! crate using these macros needs its own `defmt` feature.

/// Log a warning
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::warn!($($arg)*);

        #[cfg(test)]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(not(any(feature = "defmt", test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::debug!($($arg)*);

        #[cfg(test)]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(not(any(feature = "defmt", test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log a trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::trace!($($arg)*);

        #[cfg(test)]
        println!("[TRACE] {}", format!($($arg)*));

        #[cfg(not(any(feature = "defmt", test)))]
        let _ = format_args!($($arg)*);
    }};
}

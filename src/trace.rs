// Logging shims. Events only reach `tracing` when the `tracing` feature is
// enabled; otherwise the macros expand to nothing.
#![allow(unused_macros)]

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)+);
        }
    }
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)+);
        }
    }
}

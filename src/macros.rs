//! Diagnostic macros that compile away unless the `tracing` feature is on.

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Returns `Err($err)` from the enclosing function, tracing the rejection.
macro_rules! reject {
    ($err:expr) => {{
        let err = $err;
        trace_event!(error = %err, "adjacency operation rejected");
        return Err(err);
    }};
}

//! Logging shorthands routed through dedicated `tracing` targets so the
//! terminal formatter can style them.

/// Reports a completed step. Rendered with a `[+]` prefix.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "bmi::success", $($arg)*)
    };
}

/// Writes a pre-formatted line without any prefix.
#[macro_export]
macro_rules! raw {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "bmi::print", $($arg)*)
    };
}

/// Logs a milestone that finished well. Rendered with a `[+]` by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "pingsweep::success", $($arg)*)
    };
}

//! Logging macros.

/// Evaluates the given expression, logging at the trace level when it begins
/// and when it is done.
///
/// Nothing is timed when trace logging is disabled.
#[macro_export]
macro_rules! with_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {{
        if $crate::log_enabled!($crate::Level::Trace) {
            $crate::trace!(concat!("Begin: ", $message)$(,$arg)*);
            let _start_time = ::std::time::Instant::now();
            let _result = $expression;
            let _duration = _start_time.elapsed();
            $crate::trace!(
                concat!("({:.2} ms) Done: ", $message),
                _duration.as_secs_f64() * 1e3
                $(,$arg)*
            );
            _result
        } else {
            $expression
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn with_trace_logging_returns_value_of_expression() {
        let value = with_trace_logging!("Computing {}", "sum"; 2 + 3);
        assert_eq!(value, 5);
    }
}

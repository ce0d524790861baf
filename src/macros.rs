/// Builds an [`Arg`](crate::Arg) from any expression, preferring
/// [`Loggable`](crate::Loggable) over `Display`.
#[doc(hidden)]
#[macro_export]
macro_rules! __tl_arg {
    ($arg:expr) => {
        (&$crate::loggable::ArgProbe(&$arg)).to_arg()
    };
}

/// Logs a line with the given severity through the process-wide logger.
///
/// Each argument may be any `Display` or [`Loggable`](crate::Loggable) value.
///
/// # Examples
///
/// ```
/// use tiny_logger::{tl_log, Severity};
///
/// tl_log!(Severity::Info, "@ + @ = @", 1, 2, 3);
/// ```
#[macro_export]
macro_rules! tl_log {
    ($sev:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::loggable::{ViaDisplay as _, ViaLoggable as _};
        $crate::log($sev, $fmt, &[$($crate::__tl_arg!($arg)),*])
    }};
}

/// Logs a [`FATAL`](crate::Severity::Fatal) line.
#[macro_export]
macro_rules! tl_fatal {
    ($($args:tt)+) => { $crate::tl_log!($crate::Severity::Fatal, $($args)+) };
}

/// Logs an [`ERROR`](crate::Severity::Error) line.
#[macro_export]
macro_rules! tl_error {
    ($($args:tt)+) => { $crate::tl_log!($crate::Severity::Error, $($args)+) };
}

/// Logs a [`WARNING`](crate::Severity::Warning) line.
#[macro_export]
macro_rules! tl_warning {
    ($($args:tt)+) => { $crate::tl_log!($crate::Severity::Warning, $($args)+) };
}

/// Logs an [`INFO`](crate::Severity::Info) line.
#[macro_export]
macro_rules! tl_info {
    ($($args:tt)+) => { $crate::tl_log!($crate::Severity::Info, $($args)+) };
}

/// Logs a [`TRACE`](crate::Severity::Trace) line.
#[macro_export]
macro_rules! tl_trace {
    ($($args:tt)+) => { $crate::tl_log!($crate::Severity::Trace, $($args)+) };
}

/// Prints one or more values separated by spaces, without a prompt.
///
/// # Examples
///
/// ```
/// use tiny_logger::tl_value;
///
/// tl_value!(123.456);
/// tl_value!("a", 'b', 3);
/// ```
#[macro_export]
macro_rules! tl_value {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::loggable::{ViaDisplay as _, ViaLoggable as _};
        $crate::log_value($crate::__tl_arg!($first), &[$($crate::__tl_arg!($rest)),*])
    }};
}

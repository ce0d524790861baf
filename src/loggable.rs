//! Values that can be passed as log arguments.
//!
//! Anything implementing [`std::fmt::Display`] can be logged as-is. Types that
//! want a different rendering in log output implement [`Loggable`]; when a type
//! implements both, the logging macros use [`Loggable`].

use std::fmt;

/// Custom text rendering for log output
pub trait Loggable {
    /// Text written in place of the placeholder this value fills
    fn to_log_string(&self) -> String;
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn to_log_string(&self) -> String {
        (**self).to_log_string()
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    fn to_log_string(&self) -> String {
        (**self).to_log_string()
    }
}

/// A single log argument. Rendered only when its placeholder is reached.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// Rendered with `Display`
    Display(&'a dyn fmt::Display),
    /// Rendered with [`Loggable::to_log_string`]
    Loggable(&'a dyn Loggable),
}

impl<'a> Arg<'a> {
    /// Argument rendered with `Display`.
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Arg::Display(value)
    }

    /// Argument rendered with [`Loggable::to_log_string`].
    pub fn loggable<T: Loggable>(value: &'a T) -> Self {
        Arg::Loggable(value)
    }
}

impl<'a, T: fmt::Display> From<&'a T> for Arg<'a> {
    fn from(value: &'a T) -> Self {
        Arg::Display(value)
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Display(value) => value.fmt(f),
            Arg::Loggable(value) => f.write_str(&value.to_log_string()),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Display(_) => f.debug_tuple("Display").field(&self.to_string()).finish(),
            Arg::Loggable(_) => f.debug_tuple("Loggable").field(&self.to_string()).finish(),
        }
    }
}

// Macro support: picks `Arg::Loggable` when `T: Loggable` and falls back to
// `Arg::Display` otherwise. Method lookup tries `ArgProbe` by value before
// `&ArgProbe`, so `ViaLoggable` shadows `ViaDisplay` whenever both apply.
#[doc(hidden)]
pub struct ArgProbe<'a, T>(pub &'a T);

#[doc(hidden)]
pub trait ViaLoggable<'a> {
    fn to_arg(&self) -> Arg<'a>;
}

impl<'a, T: Loggable> ViaLoggable<'a> for ArgProbe<'a, T> {
    fn to_arg(&self) -> Arg<'a> {
        Arg::Loggable(self.0)
    }
}

#[doc(hidden)]
pub trait ViaDisplay<'a> {
    fn to_arg(&self) -> Arg<'a>;
}

impl<'a, T: fmt::Display> ViaDisplay<'a> for &ArgProbe<'a, T> {
    fn to_arg(&self) -> Arg<'a> {
        Arg::Display(self.0)
    }
}

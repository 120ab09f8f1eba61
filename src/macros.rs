//! Tracing of translator decisions, compiled out unless the `html_trace`
//! feature is enabled.

/// Stands in for a trace call so that arms which only trace still differ.
#[cfg(not(feature = "html_trace"))]
#[inline(always)]
pub fn nop() {}

#[cfg(feature = "html_trace_bt")]
macro_rules! html_trace {
    ($fmt:expr) => {
         let bt = ::backtrace::Backtrace::new();
         ::log::trace!( concat!($fmt, " at {:?}"), bt );
    };
    ($fmt:expr, $( $args:expr ),*) => {
         let bt = ::backtrace::Backtrace::new();
         ::log::trace!( concat!($fmt, " at {:?}"), $( $args ),* , bt );
    };
}

#[cfg(all(feature = "html_trace", not(feature = "html_trace_bt")))]
macro_rules! html_trace {
    ($fmt:expr) => {
         ::log::trace!( $fmt );
    };
    ($fmt:expr, $( $args:expr ),*) => {
         ::log::trace!( $fmt, $( $args ),* );
    };
}

#[cfg(not(feature = "html_trace"))]
macro_rules! html_trace {
    ($fmt:expr) => { $crate::macros::nop(); };
    ($fmt:expr, $( $args:expr ),*) => { $crate::macros::nop(); };
}

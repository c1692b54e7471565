#[cfg(feature = "tracing")]
macro_rules! fstrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "accordion_fastscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fstrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! fsdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "accordion_fastscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! fsdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! tdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "tablecore", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tdebug {
    ($($tt:tt)*) => {};
}

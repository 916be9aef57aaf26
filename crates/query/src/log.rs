//! Debug logging.
//!
//! With the `debug-log` feature, `debug_log!` writes to the browser console.
//! Without it the arguments are type-checked and nothing is emitted.

#[cfg(feature = "debug-log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        ::web_sys::console::log_1(&::alloc::format!($($arg)*).as_str().into())
    };
}

#[cfg(not(feature = "debug-log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if false {
            let _ = ::alloc::format!($($arg)*);
        }
    };
}

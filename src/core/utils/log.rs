//! Console logging
//!
//! On wasm32 the macros forward to `web_sys::console`.
//! On native targets they compile to no-ops so the core runs under `cargo test`
//! without a JS host.

#[doc(hidden)]
pub fn write_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

#[doc(hidden)]
pub fn write_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// `format!`-style info line on the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::write_log(&format!($($arg)*))
    };
}

/// `format!`-style warning on the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::log::write_warn(&format!($($arg)*))
    };
}

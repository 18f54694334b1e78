//! Console Logging
//!
//! Thin wrappers over the browser console with a bracketed tag prefix.
//! Off wasm32 (native `cargo test`) lines go to stderr instead.

#[cfg(target_arch = "wasm32")]
pub fn log_info(tag: &str, msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!("[{}] {}", tag, msg)));
}

#[cfg(target_arch = "wasm32")]
pub fn log_warn(tag: &str, msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!("[{}] {}", tag, msg)));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_info(tag: &str, msg: &str) {
    eprintln!("[{}] {}", tag, msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_warn(tag: &str, msg: &str) {
    eprintln!("[{}] WARN {}", tag, msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_runs_on_host() {
        log_info("TEST", "info line");
        log_warn("TEST", "warn line");
    }
}

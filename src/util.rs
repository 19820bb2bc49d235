// Console logging helpers. Native builds (unit tests) have no console, so they go to stderr.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warning: {msg}");
}

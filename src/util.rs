use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn format_spread(spread: usize, total: usize) -> String {
    format!("Spread {} of {}", spread + 1, total)
}

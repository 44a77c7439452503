// Formatting and logging helpers shared by the views.

/// Elapsed game clock as `m:ss`. Minutes are not capped at 60.
pub fn format_clock(ticks: u64) -> String {
    format!("{}:{:02}", ticks / 60, ticks % 60)
}

/// Money with thousands separators, e.g. `$12,500`.
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if amount < 0 {
        out.push('-');
    }
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

// no console off the browser (native unit tests)
#[cfg(not(target_arch = "wasm32"))]
pub fn clog(_msg: &str) {}

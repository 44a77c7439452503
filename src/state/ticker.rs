// Periodic timer handle. The interval lives exactly as long as the Ticker.
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub struct Ticker {
    window: web_sys::Window,
    interval_id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Ticker {
    /// Register `on_tick` with `window.setInterval`.
    pub fn start(period_ms: u32, on_tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
        let callback = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            window,
            interval_id,
            _callback: callback,
        })
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.interval_id);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            let _ = web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn fires_until_stopped() {
        let count = Rc::new(Cell::new(0u32));
        let ticker = {
            let count = count.clone();
            Ticker::start(10, move || count.set(count.get() + 1)).unwrap()
        };
        sleep(60).await;
        ticker.stop();
        let stopped_at = count.get();
        assert!(stopped_at >= 1);
        sleep(60).await;
        assert_eq!(count.get(), stopped_at);
    }

    #[wasm_bindgen_test]
    async fn drop_clears_interval() {
        let count = Rc::new(Cell::new(0u32));
        {
            let count = count.clone();
            let _ticker = Ticker::start(10, move || count.set(count.get() + 1)).unwrap();
        }
        sleep(50).await;
        assert_eq!(count.get(), 0);
    }
}

//! IntersectionObserver binding for reveal-on-scroll

use shared::error::{Error, Result};
use shared::reveal::REVEAL_THRESHOLDS;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observes one element until the sample handler asks to stop.
///
/// Dropping the handle disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    /// Start observing `target`. `on_sample` receives each intersection ratio
    /// and returns `true` once the observer should be detached. Samples are
    /// reported at [`REVEAL_THRESHOLDS`].
    pub fn observe(target: &Element, mut on_sample: impl FnMut(f64) -> bool + 'static) -> Result<Self> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if on_sample(entry.intersection_ratio()) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let thresholds: js_sys::Array = REVEAL_THRESHOLDS
            .iter()
            .copied()
            .map(JsValue::from_f64)
            .collect();
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| Error::Browser(format!("IntersectionObserver unavailable: {:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

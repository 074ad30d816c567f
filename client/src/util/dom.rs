//! Thin wrappers over window and element APIs.
//!
//! Client-side (csr): real `web_sys` calls; failures are logged and ignored.
//! Native builds: inert fallbacks.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use leptos::html::Div;
use leptos::prelude::*;
use studio::marquee::StripMetrics;

/// Viewport width assumed when no window is available.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;

/// `window.innerWidth` in CSS pixels.
#[must_use]
pub fn viewport_width() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

/// `window.scrollY`.
#[must_use]
pub fn page_scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Run `f` once after `ms` milliseconds.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn after_ms(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(ms, f).forget();
}

/// Smooth-scroll the element with `id` into view.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            leptos::logging::warn!("scroll target #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Blocking acknowledgement dialog.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            leptos::logging::warn!("alert unavailable: {message}");
        }
    }
}

/// Fractional `scrollLeft` of a horizontal strip; 0 when unmounted.
#[must_use]
pub fn strip_scroll_left(strip: NodeRef<Div>) -> f64 {
    #[cfg(feature = "csr")]
    {
        strip.get_untracked().map_or(0.0, |el| {
            js_sys::Reflect::get(el.as_ref(), &wasm_bindgen::JsValue::from_str("scrollLeft"))
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or_else(|| f64::from(el.scroll_left()))
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = strip;
        0.0
    }
}

/// Measured layout of a looping strip holding `copies` runs of `per_copy`
/// cards. The period is the offset between the first card and its twin in
/// the next copy; it reads as 0 until the rendered cards match.
#[must_use]
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn strip_metrics(strip: NodeRef<Div>, per_copy: usize, copies: usize) -> StripMetrics {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        strip.get_untracked().map_or_else(StripMetrics::default, |el| {
            let children = el.children();
            let left_of = |index: usize| {
                u32::try_from(index)
                    .ok()
                    .and_then(|index| children.item(index))
                    .and_then(|child| child.dyn_into::<web_sys::HtmlElement>().ok())
                    .map(|child| f64::from(child.offset_left()))
            };
            let rendered = usize::try_from(children.length()).unwrap_or(0);
            let period = match (left_of(0), left_of(per_copy)) {
                (Some(first), Some(twin)) if per_copy > 0 && rendered == per_copy * copies => twin - first,
                _ => 0.0,
            };
            StripMetrics {
                scroll_width: f64::from(el.scroll_width()),
                client_width: f64::from(el.client_width()),
                period,
            }
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        StripMetrics::default()
    }
}

/// Jump a strip to a fractional `scrollLeft`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn set_strip_scroll_left(strip: NodeRef<Div>, value: f64) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = strip.get_untracked() else {
            return;
        };
        let key = wasm_bindgen::JsValue::from_str("scrollLeft");
        if js_sys::Reflect::set(el.as_ref(), &key, &wasm_bindgen::JsValue::from_f64(value)).is_err() {
            leptos::logging::warn!("scrollLeft assignment refused");
        }
    }
}

/// Smooth relative horizontal scroll of a strip.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn scroll_strip_by(strip: NodeRef<Div>, dx: f64) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = strip.get_untracked() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_left(dx);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    }
}

use gloo::events::EventListener;
use yew::prelude::*;

/// Width assumed when the window cannot be measured
const FALLBACK_WIDTH: u32 = 1024;

pub fn current_viewport_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Viewport width, measured at mount and updated on every resize
#[hook]
pub fn use_viewport_width() -> u32 {
    let width = use_state(current_viewport_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    width.set(current_viewport_width());
                })
            });
            move || drop(listener)
        });
    }

    *width
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_viewport_width_is_measured() {
        assert!(current_viewport_width() > 0);
    }
}

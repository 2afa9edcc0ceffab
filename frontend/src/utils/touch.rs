use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn detect_touch() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let has_touch_start = js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false);
    let touch_points = window.navigator().max_touch_points();
    let coarse_pointer = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    is_touch_capable(has_touch_start, touch_points, coarse_pointer)
}

pub fn is_touch_capable(has_touch_start: bool, touch_points: i32, coarse_pointer: bool) -> bool {
    has_touch_start || touch_points > 0 || coarse_pointer
}

/// True on devices whose primary input is touch. Re-evaluated on resize since
/// tablets can dock a mouse.
#[hook]
pub fn use_touch_device() -> bool {
    let is_touch = use_state_eq(|| false);
    {
        let is_touch = is_touch.clone();
        use_effect_with_deps(
            move |_| {
                is_touch.set(detect_touch());
                let listener = web_sys::window().and_then(|window| {
                    let on_resize = Closure::<dyn Fn()>::new(move || is_touch.set(detect_touch()));
                    match window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
                        Ok(()) => Some((window, on_resize)),
                        Err(e) => {
                            log::warn!("Failed to watch resize: {:?}", e);
                            None
                        }
                    }
                });
                move || {
                    if let Some((window, on_resize)) = listener {
                        let _ = window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }
    *is_touch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_touch_signal_counts() {
        assert!(!is_touch_capable(false, 0, false));
        assert!(is_touch_capable(true, 0, false));
        assert!(is_touch_capable(false, 5, false));
        assert!(is_touch_capable(false, 0, true));
    }
}

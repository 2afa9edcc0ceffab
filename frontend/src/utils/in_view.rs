use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Reports whether the referenced element has scrolled into view. Latches on
/// the first sighting so entrance animations only play once.
#[hook]
pub fn use_in_view() -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_entries = {
                        let visible = visible.clone();
                        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                let seen = entries
                                    .iter()
                                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                    .any(|entry| entry.is_intersecting());
                                if seen {
                                    visible.set(true);
                                    observer.disconnect();
                                }
                            },
                        )
                    };
                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
                        Ok(io) => {
                            io.observe(&element);
                            observer = Some((io, on_entries));
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable, showing section: {:?}", e);
                            visible.set(true);
                        }
                    }
                } else {
                    visible.set(true);
                }
                move || {
                    if let Some((io, _on_entries)) = observer {
                        io.disconnect();
                    }
                }
            },
            (),
        );
    }
    (node, *visible)
}

/// Class list for an element that fades in once its section is visible.
pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{} reveal is-visible", base)
    } else {
        format!("{} reveal", base)
    }
}

/// Inline transition delay for the `index`th item of a staggered group.
pub fn stagger(index: usize, base_ms: u32, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", base_ms + step_ms * index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_class_toggles_visibility_marker() {
        assert_eq!(reveal_class("card", false), "card reveal");
        assert_eq!(reveal_class("card", true), "card reveal is-visible");
    }

    #[test]
    fn stagger_steps_from_base() {
        assert_eq!(stagger(0, 200, 150), "transition-delay: 200ms;");
        assert_eq!(stagger(3, 0, 150), "transition-delay: 450ms;");
    }
}

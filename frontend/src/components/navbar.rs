use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

pub fn is_solid(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SOLID_AFTER_PX
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(is_solid(scroll_y));
                                }
                            }
                        }
                    });
                    if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        log::warn!("Failed to watch scroll: {:?}", e);
                    }
                    if let Ok(scroll_y) = window.scroll_y() {
                        scrolled.set(is_solid(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let nav_class = if *scrolled { "site-nav solid" } else { "site-nav" };
    html! {
        <nav class={nav_class}>
            <div class="container-wide nav-inner">
                <a href="#" class="nav-logo">
                    <img src="/assets/solefresh-logo.png" alt={config::BRAND} />
                </a>
                <div class="nav-links">
                    <a href="#science">{"How It Works"}</a>
                    <a href="#ingredients">{"Ingredients"}</a>
                    <a href="#details">{"Details"}</a>
                </div>
                <Link<Route> to={Route::Shop} classes="nav-cta">
                    {"Buy Now"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                    animation: nav-drop 0.6s ease-out;
                }
                .site-nav.solid {
                    background: hsl(var(--background) / 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom-color: hsl(var(--border));
                }
                .nav-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                    padding: 0 1.5rem;
                }
                .nav-logo img {
                    height: 3rem;
                    width: auto;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-links a {
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-links a:hover {
                    color: hsl(var(--foreground));
                }
                .nav-cta {
                    padding: 0.5rem 1.25rem;
                    background: hsl(var(--primary));
                    color: hsl(var(--primary-foreground));
                    font-size: 0.875rem;
                    font-weight: 600;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .nav-cta:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 30px hsl(var(--primary) / 0.3);
                }
                @keyframes nav-drop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .nav-inner {
                        height: 4rem;
                    }
                    .nav-logo img {
                        height: 2.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_solid_only_past_threshold() {
        assert!(!is_solid(0.0));
        assert!(!is_solid(50.0));
        assert!(is_solid(50.5));
        assert!(is_solid(900.0));
    }
}

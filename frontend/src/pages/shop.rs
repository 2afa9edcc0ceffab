use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::shop::browser::{IntervalScheduler, WindowOpener};
use crate::shop::catalog::{self, PlatformEntry};
use crate::shop::countdown::{RedirectController, SelectionState};
use crate::utils::touch::use_touch_device;
use crate::Route;

type BrowserController = RedirectController<IntervalScheduler, WindowOpener>;

const TRUST_BADGES: [(&str, &str); 3] = [
    ("fa-shield-halved", "100% Authentic"),
    ("fa-truck", "Fast Delivery"),
    ("fa-star", "Top Rated"),
];

/// Owns the redirect controller for the lifetime of the page and mirrors its
/// state into Yew so cards re-render on every tick.
#[hook]
fn use_redirect_countdown() -> (SelectionState, Callback<usize>) {
    let state = use_state_eq(SelectionState::default);
    let controller = {
        let state = state.clone();
        use_memo(
            move |_| {
                BrowserController::new(
                    catalog::platforms(),
                    IntervalScheduler,
                    WindowOpener,
                    move |next| state.set(next),
                )
            },
            (),
        )
    };
    {
        let controller = controller.clone();
        use_effect_with_deps(move |_| move || controller.cancel(), ());
    }
    let activate = {
        let controller = controller.clone();
        Callback::from(move |index: usize| {
            if let Err(e) = controller.activate(index) {
                log::error!("Ignoring platform click: {}", e);
            }
        })
    };
    (*state, activate)
}

pub fn cursor_glow(x: i32, y: i32) -> String {
    format!(
        "background: radial-gradient(600px circle at {}px {}px, hsl(var(--primary) / 0.06), transparent 40%);",
        x, y
    )
}

#[derive(Properties, PartialEq)]
struct PlatformCardProps {
    index: usize,
    entry: &'static PlatformEntry,
    countdown: Option<u32>,
    on_select: Callback<usize>,
}

#[function_component(PlatformCard)]
fn platform_card(props: &PlatformCardProps) -> Html {
    let entry = props.entry;
    let onclick = props.on_select.reform({
        let index = props.index;
        move |_: MouseEvent| index
    });
    let delay = format!("animation-delay: {}ms;", 300 + 100 * props.index);

    html! {
        <div class="platform-slot enter" style={delay}>
            <button type="button" class="glass-card platform-card" {onclick}>
                <div class="platform-wash" style={format!("background: {};", entry.accent)}></div>
                <div class="platform-shine"></div>
                <div class="platform-body">
                    <div class="platform-top">
                        <span class="platform-icon">{entry.icon}</span>
                        <i class="fas fa-arrow-up-right-from-square"></i>
                    </div>
                    <h2>{entry.name}</h2>
                    <p class="platform-description">{entry.description}</p>
                    <div class="platform-features">
                        { for entry.features.iter().map(|feature| html! {
                            <span key={*feature} class="feature-tag">{*feature}</span>
                        }) }
                    </div>
                    <div class="platform-cta">
                        {
                            match props.countdown {
                                Some(remaining) => html! {
                                    <span class="redirecting">
                                        <span class="countdown-badge">{remaining}</span>
                                        {"Redirecting..."}
                                    </span>
                                },
                                None => html! {
                                    <>
                                        <i class="fas fa-bag-shopping"></i>
                                        <span>{format!("Shop on {}", entry.name)}</span>
                                        <i class="fas fa-arrow-right cta-arrow"></i>
                                    </>
                                },
                            }
                        }
                    </div>
                </div>
                <div class="platform-accent"></div>
            </button>
        </div>
    }
}

#[function_component(Shop)]
pub fn shop() -> Html {
    let (selection, activate) = use_redirect_countdown();
    let is_touch = use_touch_device();
    let mouse = use_state_eq(|| (0, 0));
    {
        let mouse = mouse.clone();
        use_effect_with_deps(
            move |touch: &bool| {
                let listener = if *touch {
                    None
                } else {
                    web_sys::window().and_then(|window| {
                        let on_move = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                            mouse.set((e.client_x(), e.client_y()));
                        });
                        match window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref()) {
                            Ok(()) => Some((window, on_move)),
                            Err(e) => {
                                log::warn!("Failed to track pointer: {:?}", e);
                                None
                            }
                        }
                    })
                };
                move || {
                    if let Some((window, on_move)) = listener {
                        let _ = window.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                    }
                }
            },
            is_touch,
        );
    }

    let (x, y) = *mouse;

    html! {
        <div class="shop-page">
            if !is_touch {
                <div class="cursor-glow" style={cursor_glow(x, y)}></div>
            }
            <div class="shop-backdrop">
                <div class="shop-grid"></div>
                <div class="orb orb-a float-slow"></div>
                <div class="orb orb-b float"></div>
                <div class="rings">
                    <div class="ring spin-slow" style="animation-duration: 30s;"></div>
                    <div class="ring spin-slow inset-8" style="animation-duration: 40s; animation-direction: reverse;"></div>
                    <div class="ring spin-slow inset-16" style="animation-duration: 50s;"></div>
                </div>
            </div>

            <div class="shop-content">
                <Link<Route> to={Route::Home} classes="shop-logo enter">
                    <img src="/assets/solefresh-logo.png" alt={config::BRAND} />
                </Link<Route>>

                <div class="shop-heading enter" style="animation-delay: 100ms;">
                    <h1>{"Choose Your "}<span class="text-gradient">{"Platform"}</span></h1>
                    <p>{format!("Select your preferred shopping platform to purchase {}", config::BRAND)}</p>
                </div>

                <div class="trust-badges enter" style="animation-delay: 200ms;">
                    { for TRUST_BADGES.iter().map(|(icon, text)| html! {
                        <div key={*text} class="trust-badge">
                            <i class={classes!("fas", *icon)}></i>
                            <span>{*text}</span>
                        </div>
                    }) }
                </div>

                <div class="platform-grid">
                    { for catalog::platforms().iter().enumerate().map(|(index, entry)| {
                        let countdown = if selection.active_index() == Some(index) {
                            selection.remaining()
                        } else {
                            None
                        };
                        html! {
                            <PlatformCard
                                key={entry.name}
                                {index}
                                {entry}
                                {countdown}
                                on_select={activate.clone()}
                            />
                        }
                    }) }
                </div>

                <Link<Route> to={Route::Home} classes="back-link enter">
                    <i class="fas fa-arrow-left"></i>
                    {"Back to Home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .shop-page {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                }
                .cursor-glow {
                    pointer-events: none;
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    transition: opacity 0.3s;
                }
                .shop-backdrop {
                    position: absolute;
                    inset: 0;
                }
                .shop-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.03;
                    background-image: linear-gradient(hsl(var(--primary)) 1px, transparent 1px), linear-gradient(90deg, hsl(var(--primary)) 1px, transparent 1px);
                    background-size: 60px 60px;
                }
                .orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    will-change: transform;
                }
                .orb-a {
                    top: 25%;
                    left: 25%;
                    width: 600px;
                    height: 600px;
                    opacity: 0.2;
                    background: radial-gradient(circle, hsl(var(--primary) / 0.4) 0%, transparent 70%);
                }
                .orb-b {
                    bottom: 25%;
                    right: 25%;
                    width: 500px;
                    height: 500px;
                    opacity: 0.15;
                    animation-delay: 2s;
                    background: radial-gradient(circle, hsl(142 80% 55% / 0.3) 0%, transparent 70%);
                }
                .rings {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 800px;
                    height: 800px;
                    transform: translate(-50%, -50%);
                }
                .ring {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    border: 1px solid hsl(var(--primary) / 0.1);
                }
                .ring.inset-8 {
                    inset: 2rem;
                    border-color: hsl(var(--primary) / 0.05);
                }
                .ring.inset-16 {
                    inset: 4rem;
                }
                .shop-content {
                    position: relative;
                    z-index: 10;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 5rem 1.5rem;
                }
                .shop-logo {
                    margin-bottom: 3rem;
                }
                .shop-logo img {
                    height: 5rem;
                    width: auto;
                    transition: transform 0.3s;
                }
                .shop-logo:hover img {
                    transform: scale(1.05);
                }
                .shop-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .shop-heading h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin-bottom: 1.5rem;
                }
                .shop-heading p {
                    color: hsl(var(--muted-foreground));
                    font-size: 1.25rem;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .trust-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: hsl(var(--card) / 0.5);
                    border: 1px solid hsl(var(--border) / 0.5);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                }
                .trust-badge i {
                    color: hsl(var(--primary));
                }
                .platform-grid {
                    display: grid;
                    gap: 2rem;
                    max-width: 56rem;
                    width: 100%;
                    margin: 0 auto;
                }
                .platform-card {
                    position: relative;
                    overflow: hidden;
                    width: 100%;
                    text-align: left;
                    color: inherit;
                    font: inherit;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    cursor: pointer;
                    transition: transform 0.5s, border-color 0.5s;
                }
                .platform-card:hover {
                    transform: translateY(-0.75rem) scale(1.02);
                    border-color: hsl(var(--primary) / 0.5);
                }
                .platform-wash {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .platform-card:hover .platform-wash {
                    opacity: 0.2;
                }
                .platform-shine {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
                    transform: translateX(-100%);
                    transition: transform 1s;
                }
                .platform-card:hover .platform-shine {
                    transform: translateX(100%);
                }
                .platform-body {
                    position: relative;
                    z-index: 10;
                }
                .platform-top {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                    color: hsl(var(--muted-foreground));
                }
                .platform-icon {
                    font-size: 3rem;
                    transition: transform 0.3s;
                }
                .platform-card:hover .platform-icon {
                    transform: scale(1.25) rotate(12deg);
                }
                .platform-card h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .platform-description {
                    color: hsl(var(--muted-foreground));
                    margin-bottom: 1.5rem;
                }
                .platform-features {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .feature-tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    background: hsl(var(--primary) / 0.1);
                    color: hsl(var(--primary));
                    border: 1px solid hsl(var(--primary) / 0.2);
                }
                .platform-cta {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: hsl(var(--primary));
                    font-weight: 600;
                    transition: gap 0.3s;
                }
                .platform-card:hover .platform-cta {
                    gap: 1rem;
                }
                .redirecting {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .countdown-badge {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 2px solid hsl(var(--primary));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .platform-accent {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 0.25rem;
                    background: linear-gradient(90deg, transparent, hsl(var(--primary)), transparent);
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .platform-card:hover .platform-accent {
                    opacity: 1;
                }
                .back-link {
                    margin-top: 4rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: hsl(var(--muted-foreground));
                    text-decoration: none;
                    transition: color 0.3s;
                    animation-delay: 600ms;
                }
                .back-link:hover {
                    color: hsl(var(--primary));
                }
                @media (min-width: 768px) {
                    .platform-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_follows_pointer() {
        let style = cursor_glow(120, 48);
        assert!(style.contains("at 120px 48px"));
        assert!(style.starts_with("background: radial-gradient(600px circle"));
    }
}

use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::utils::in_view::{reveal_class, use_in_view};
use crate::Route;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let (node, visible) = use_in_view();
    let year = use_memo(|_| current_year(), ());

    html! {
        <footer ref={node} class="section-padding site-footer">
            <div class="container-wide">
                <div class="footer-row">
                    <div class={reveal_class("footer-brand", visible)}>
                        <h3>
                            <span class="text-foreground">{"SOLE"}</span>
                            <span class="text-gradient">{"FRESH"}</span>
                        </h3>
                        <p>{"Fresh shoes. Every day."}</p>
                    </div>
                    <div class={reveal_class("footer-links", visible)} style="transition-delay: 100ms;">
                        <Link<Route> to={Route::Shop}>{"Shop"}</Link<Route>>
                        <a href="#science">{"How It Works"}</a>
                        <a href="#ingredients">{"Ingredients"}</a>
                    </div>
                    <div class={reveal_class("footer-safety", visible)} style="transition-delay: 200ms;">
                        <p>{"For external use only. Keep away from children and pets. Do not open sachets."}</p>
                    </div>
                </div>
                <div class={reveal_class("footer-bottom", visible)} style="transition-delay: 300ms;">
                    <p>{format!("© {} {}. Made with care in India.", *year, config::BRAND)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: hsl(var(--background));
                    border-top: 1px solid hsl(var(--border));
                }
                .footer-row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .footer-brand h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .footer-brand p,
                .footer-safety p,
                .footer-bottom p {
                    color: hsl(var(--muted-foreground));
                }
                .footer-links {
                    display: flex;
                    gap: 2rem;
                }
                .footer-links a {
                    color: hsl(var(--muted-foreground));
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-links a:hover {
                    color: hsl(var(--primary));
                }
                .footer-safety p {
                    font-size: 0.75rem;
                    max-width: 20rem;
                }
                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid hsl(var(--border));
                    text-align: center;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .footer-row {
                        flex-direction: row;
                    }
                    .footer-brand {
                        text-align: left;
                    }
                    .footer-safety {
                        text-align: right;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

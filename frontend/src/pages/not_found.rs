use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1 class="text-gradient">{"404"}</h1>
            <p>{"This page wandered off. Your shoes stay fresh though."}</p>
            <Link<Route> to={Route::Home} classes="back-link">
                <i class="fas fa-arrow-left"></i>
                {"Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .not-found h1 {
                    font-size: 6rem;
                    font-weight: 700;
                }
                .not-found p {
                    color: hsl(var(--muted-foreground));
                }
                "#}
            </style>
        </div>
    }
}

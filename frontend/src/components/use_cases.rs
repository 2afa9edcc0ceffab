use yew::prelude::*;

use crate::utils::in_view::{reveal_class, stagger, use_in_view};

const USE_CASES: [(&str, &str, &str); 4] = [
    ("fa-briefcase", "Daily Work", "Perfect for office shoes worn during long work hours."),
    ("fa-dumbbell", "Gym & Sports", "Ideal for athletic shoes and gym bags."),
    ("fa-plane", "Travel", "Keep your travel bags and shoes fresh on the go."),
    ("fa-house", "Home Storage", "Great for shoe racks and cupboards."),
];

#[function_component(UseCases)]
pub fn use_cases() -> Html {
    let (node, visible) = use_in_view();

    html! {
        <section ref={node} class="section-padding bg-card">
            <div class="container-wide">
                <div class={reveal_class("section-header", visible)}>
                    <span class="eyebrow">{"Versatile"}</span>
                    <h2 class="section-title">
                        {"Perfect "}<span class="text-gradient">{"For"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Designed for the Indian lifestyle: humid weather, long commutes, and active days."}
                    </p>
                </div>
                <div class="grid-4">
                    { for USE_CASES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                        <div key={*title} class={reveal_class("glass-card use-case", visible)} style={stagger(index, 0, 150)}>
                            <div class="icon-tile centered">
                                <i class={classes!("fas", *icon)}></i>
                            </div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .use-case {
                    border-radius: 1rem;
                    padding: 2rem;
                    height: 100%;
                    text-align: center;
                }
                .use-case:hover .icon-tile {
                    transform: scale(1.1);
                }
                .use-case h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .use-case p {
                    color: hsl(var(--muted-foreground));
                }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::utils::in_view::{reveal_class, stagger, use_in_view};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "fa-droplet",
        title: "Absorbs Moisture",
        description: "Silica gel crystals powerfully absorb dampness, preventing bacterial growth.",
    },
    Feature {
        icon: "fa-wind",
        title: "Neutralizes Odor",
        description: "Activated carbon traps odor-causing particles and volatile compounds.",
    },
    Feature {
        icon: "fa-leaf",
        title: "100% Natural",
        description: "No chemicals, sprays, or artificial fragrances. Just natural freshness.",
    },
    Feature {
        icon: "fa-rotate",
        title: "Reusable",
        description: "Refresh in sunlight for 2-3 hours. Reuse for weeks to months.",
    },
];

#[function_component(Science)]
pub fn science() -> Html {
    let (node, visible) = use_in_view();

    html! {
        <section ref={node} class="section-padding bg-card science">
            <div class="dot-grid"></div>
            <div class="container-wide science-inner">
                <div class={reveal_class("section-header", visible)}>
                    <span class="eyebrow">{"The Science"}</span>
                    <h2 class="section-title">
                        {"How It "}<span class="text-gradient">{"Works"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Unlike sprays that mask odor, SoleFresh eliminates the root cause: moisture and bacteria."}
                    </p>
                </div>
                <div class="grid-4">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div key={feature.title} class={reveal_class("glass-card feature-card", visible)} style={stagger(index, 0, 150)}>
                            <div class="icon-tile">
                                <i class={classes!("fas", feature.icon)}></i>
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .science {
                    position: relative;
                    overflow: hidden;
                }
                .dot-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    background-image: radial-gradient(circle at 2px 2px, hsl(var(--primary)) 1px, transparent 0);
                    background-size: 40px 40px;
                }
                .science-inner {
                    position: relative;
                    z-index: 10;
                }
                .feature-card {
                    border-radius: 1rem;
                    padding: 2rem;
                    height: 100%;
                }
                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .feature-card p {
                    color: hsl(var(--muted-foreground));
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

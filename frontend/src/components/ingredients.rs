use yew::prelude::*;

use crate::utils::in_view::{reveal_class, stagger, use_in_view};

struct Ingredient {
    name: &'static str,
    source: &'static str,
    description: &'static str,
    swatch: &'static str,
}

const INGREDIENTS: [Ingredient; 3] = [
    Ingredient {
        name: "Activated Carbon",
        source: "Coconut Shell Based",
        description: "High adsorption capacity traps odor-causing gases and volatile compounds.",
        swatch: "linear-gradient(135deg, #3f3f46, #18181b)",
    },
    Ingredient {
        name: "Silica Gel Crystals",
        source: "Desiccant Material",
        description: "Absorbs excess moisture, reducing humidity that promotes bacterial growth.",
        swatch: "linear-gradient(135deg, rgba(96, 165, 250, 0.3), rgba(37, 99, 235, 0.3))",
    },
    Ingredient {
        name: "Fragrance-Infused Rice",
        source: "Essential Oil Infused",
        description: "Provides mild, natural freshness without overpowering artificial scents.",
        swatch: "linear-gradient(135deg, rgba(251, 191, 36, 0.3), rgba(217, 119, 6, 0.3))",
    },
];

#[function_component(Ingredients)]
pub fn ingredients() -> Html {
    let (node, visible) = use_in_view();

    html! {
        <section ref={node} class="section-padding bg-card ingredients">
            <div class="container-wide">
                <div class={reveal_class("section-header", visible)}>
                    <span class="eyebrow">{"Pure & Natural"}</span>
                    <h2 class="section-title">
                        {"What's "}<span class="text-gradient">{"Inside"}</span>
                    </h2>
                    <p class="section-lead">
                        {"A carefully balanced blend of three powerful natural ingredients."}
                    </p>
                </div>
                <div class="grid-3">
                    { for INGREDIENTS.iter().enumerate().map(|(index, ingredient)| html! {
                        <div key={ingredient.name} class={reveal_class("glass-card ingredient-card", visible)} style={stagger(index, 0, 200)}>
                            <div class="ingredient-wash" style={format!("background: {};", ingredient.swatch)}></div>
                            <div class="ingredient-body">
                                <div class="ingredient-swatch" style={format!("background: {};", ingredient.swatch)}></div>
                                <span class="ingredient-source">{ingredient.source}</span>
                                <h3>{ingredient.name}</h3>
                                <p>{ingredient.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class={reveal_class("fabric-note", visible)} style="transition-delay: 800ms;">
                    <p>
                        {"Packed in "}
                        <span class="text-primary">{"PP Spunbond Non-Woven Fabric (100 GSM)"}</span>
                        {": breathable, durable, and leak-proof."}
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .ingredient-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    height: 100%;
                }
                .ingredient-wash {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .ingredient-card:hover .ingredient-wash {
                    opacity: 1;
                }
                .ingredient-body {
                    position: relative;
                    z-index: 10;
                }
                .ingredient-swatch {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 1rem;
                    margin-bottom: 1.5rem;
                }
                .ingredient-source {
                    display: block;
                    font-size: 0.75rem;
                    color: hsl(var(--primary));
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.5rem;
                }
                .ingredient-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .ingredient-card p,
                .fabric-note p {
                    color: hsl(var(--muted-foreground));
                    line-height: 1.6;
                }
                .fabric-note {
                    margin-top: 3rem;
                    text-align: center;
                }
                "#}
            </style>
        </section>
    }
}

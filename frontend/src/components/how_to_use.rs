use yew::prelude::*;

use crate::utils::in_view::{reveal_class, stagger, use_in_view};

const STEPS: [(&str, &str, &str); 3] = [
    ("01", "Place", "Drop one sachet inside each shoe after use."),
    ("02", "Leave", "Let it work overnight or between wears."),
    ("03", "Reuse", "Refresh in sunlight every few days. Repeat for months."),
];

#[function_component(HowToUse)]
pub fn how_to_use() -> Html {
    let (node, visible) = use_in_view();

    html! {
        <section ref={node} class="section-padding how-to-use">
            <div class="container-wide split">
                <div class={reveal_class("split-media from-left", visible)}>
                    <div class="glow-primary half"></div>
                    <div class="float">
                        <img src="/assets/sachet.jpg" alt="SoleFresh Sachet" />
                    </div>
                </div>
                <div class="split-copy">
                    <div class={reveal_class("", visible)}>
                        <span class="eyebrow">{"Simple & Effective"}</span>
                        <h2 class="section-title steps-title">
                            {"How to "}<span class="text-gradient">{"Use"}</span>
                        </h2>
                    </div>
                    <div class="steps">
                        { for STEPS.iter().enumerate().map(|(index, (number, title, description))| html! {
                            <div key={*number} class={reveal_class("step from-right", visible)} style={stagger(index, 200, 150)}>
                                <span class="step-number text-gradient">{*number}</span>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .how-to-use .split-media {
                    position: relative;
                    order: 2;
                }
                .how-to-use .split-copy {
                    order: 1;
                }
                .split-media img {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                    display: block;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .steps-title {
                    margin-bottom: 3rem;
                }
                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .step {
                    display: flex;
                    gap: 1.5rem;
                }
                .step-number {
                    flex-shrink: 0;
                    font-size: 3.5rem;
                    font-weight: 700;
                    opacity: 0.5;
                    transition: opacity 0.3s;
                }
                .step:hover .step-number {
                    opacity: 1;
                }
                .step h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0.5rem 0;
                }
                .step p {
                    color: hsl(var(--muted-foreground));
                    font-size: 1.125rem;
                }
                @media (min-width: 1024px) {
                    .how-to-use .split-media {
                        order: 1;
                    }
                    .how-to-use .split-copy {
                        order: 2;
                    }
                }
                "#}
            </style>
        </section>
    }
}

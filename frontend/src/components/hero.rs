use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="hero-tag enter" style="animation-delay: 0s;">
                    <span class="hero-tag-dot"></span>
                    <span>{"Natural Shoe Care"}</span>
                </div>
                <h1 class="hero-title enter" style="animation-delay: 0.2s;">
                    <span class="text-foreground">{"SOLE"}</span>
                    <span class="text-gradient">{"FRESH"}</span>
                </h1>
                <p class="hero-tagline enter" style="animation-delay: 0.4s;">
                    {"Fresh shoes. "}<span class="text-primary">{"Every day."}</span>
                </p>
                <p class="hero-subtitle enter" style="animation-delay: 0.5s;">
                    {"A chemical-free, reusable shoe deodorizer that eliminates odor at its source: moisture."}
                </p>
                <div class="hero-image enter-scale" style="animation-delay: 0.6s;">
                    <div class="glow-primary"></div>
                    <img src="/assets/product-hero.jpg" alt="SoleFresh Shoe Deodorizer Sachets" />
                </div>
                <div class="hero-scroll enter" style="animation-delay: 1.5s;">
                    <div class="bob">
                        <span>{"Scroll to explore"}</span>
                        <i class="fas fa-arrow-down"></i>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding-top: 5rem;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, hsl(var(--background)), hsl(var(--background)), hsl(var(--card)));
                }
                .hero-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 600px;
                    height: 600px;
                    border-radius: 50%;
                    transform: translate(-50%, -50%);
                    background: radial-gradient(circle, hsl(var(--primary) / 0.4) 0%, transparent 70%);
                    animation: hero-breathe 4s ease-in-out infinite;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    text-align: center;
                }
                .hero-tag {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: hsl(var(--secondary));
                    border: 1px solid hsl(var(--primary) / 0.3);
                    margin-bottom: 2rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: hsl(var(--primary));
                }
                .hero-tag-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: hsl(var(--primary));
                    animation: pulse 2s ease-in-out infinite;
                }
                .hero-title {
                    font-size: clamp(3rem, 9vw, 6rem);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin-bottom: 1.5rem;
                }
                .hero-tagline {
                    font-size: clamp(1.5rem, 3vw, 1.875rem);
                    font-weight: 500;
                    max-width: 42rem;
                    margin: 0 auto 1rem;
                }
                .hero-subtitle {
                    color: hsl(var(--muted-foreground));
                    max-width: 36rem;
                    margin: 0 auto 3rem;
                }
                .hero-image {
                    position: relative;
                    max-width: 32rem;
                    margin: 0 auto;
                }
                .hero-image img {
                    position: relative;
                    width: 100%;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .hero-scroll {
                    margin-top: 4rem;
                    color: hsl(var(--muted-foreground));
                }
                .hero-scroll .bob {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                @keyframes hero-breathe {
                    0%, 100% { transform: translate(-50%, -50%) scale(1); opacity: 0.2; }
                    50% { transform: translate(-50%, -50%) scale(1.2); opacity: 0.35; }
                }
                "#}
            </style>
        </section>
    }
}

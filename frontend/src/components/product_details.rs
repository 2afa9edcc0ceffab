use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::utils::in_view::{reveal_class, stagger, use_in_view};
use crate::Route;

const DETAILS: [(&str, &str, &str); 3] = [
    ("fa-box", "Quantity", "2 × 40-50g Sachets"),
    ("fa-calendar", "Shelf Life", "2-3 Months from Mfg."),
    ("fa-location-dot", "Made in", "India"),
];

const BENEFITS: [&str; 6] = [
    "Chemical-free & natural",
    "Safe for daily use",
    "Reusable for months",
    "Works overnight",
    "Fits all shoe sizes",
    "Multi-purpose use",
];

pub fn price_label(amount: u32) -> String {
    format!("₹{}", amount)
}

#[function_component(ProductDetails)]
pub fn product_details() -> Html {
    let (node, visible) = use_in_view();

    html! {
        <section ref={node} class="section-padding product-details">
            <div class="container-wide split">
                <div class={reveal_class("from-left", visible)}>
                    <span class="eyebrow">{"Product Details"}</span>
                    <h2 class="section-title">
                        {"Premium "}<span class="text-gradient">{"Quality"}</span>
                    </h2>
                    <div class="price-row">
                        <span class="price text-gradient">{price_label(config::PRICE_INR)}</span>
                        <span class="price-note">{"inclusive of all taxes"}</span>
                    </div>
                    <div class="detail-tiles">
                        { for DETAILS.iter().enumerate().map(|(index, (icon, label, value))| html! {
                            <div key={*label} class={reveal_class("glass-card detail-tile", visible)} style={stagger(index, 200, 100)}>
                                <i class={classes!("fas", *icon)}></i>
                                <div class="detail-label">{*label}</div>
                                <div class="detail-value">{*value}</div>
                            </div>
                        }) }
                    </div>
                    <div class="benefits">
                        { for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                            <div key={*benefit} class={reveal_class("benefit", visible)} style={stagger(index, 400, 80)}>
                                <span class="benefit-check"><i class="fas fa-check"></i></span>
                                <span>{*benefit}</span>
                            </div>
                        }) }
                    </div>
                    <div class={reveal_class("", visible)} style="transition-delay: 800ms;">
                        <Link<Route> to={Route::Shop} classes="buy-button">
                            {"Buy Now"}
                            <i class="fas fa-arrow-right"></i>
                        </Link<Route>>
                    </div>
                </div>
                <div class={reveal_class("split-media from-right", visible)} style="transition-delay: 300ms;">
                    <div class="glow-primary half"></div>
                    <div class="sway">
                        <img src="/assets/product-pack.jpg" alt="SoleFresh Product Package" />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .price-row {
                    display: flex;
                    align-items: baseline;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }
                .price {
                    font-size: 3.5rem;
                    font-weight: 700;
                }
                .price-note {
                    color: hsl(var(--muted-foreground));
                }
                .detail-tiles {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .detail-tile {
                    border-radius: 0.75rem;
                    padding: 1rem;
                    text-align: center;
                }
                .detail-tile i {
                    color: hsl(var(--primary));
                    margin-bottom: 0.5rem;
                }
                .detail-label {
                    font-size: 0.75rem;
                    color: hsl(var(--muted-foreground));
                    margin-bottom: 0.25rem;
                }
                .detail-value {
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .benefits {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .benefit {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: hsl(var(--muted-foreground));
                }
                .benefit-check {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    background: hsl(var(--primary) / 0.2);
                    color: hsl(var(--primary));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.625rem;
                }
                .buy-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    background: hsl(var(--primary));
                    color: hsl(var(--primary-foreground));
                    font-weight: 600;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .buy-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 60px hsl(var(--primary) / 0.4);
                }
                .product-details .split-media {
                    position: relative;
                }
                .product-details .split-media img {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                    display: block;
                    border-radius: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_shown_in_rupees() {
        assert_eq!(price_label(config::PRICE_INR), "₹199");
    }
}

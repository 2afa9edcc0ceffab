use yew::prelude::*;

use crate::components::{
    footer::Footer, hero::Hero, how_to_use::HowToUse, ingredients::Ingredients, navbar::Navbar,
    product_details::ProductDetails, science::Science, use_cases::UseCases,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let has_anchor = window
                        .location()
                        .hash()
                        .map(|hash| !hash.is_empty())
                        .unwrap_or(false);
                    if !has_anchor {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Navbar />
            <main>
                <Hero />
                <section id="science">
                    <Science />
                </section>
                <HowToUse />
                <section id="ingredients">
                    <Ingredients />
                </section>
                <section id="details">
                    <ProductDetails />
                </section>
                <UseCases />
            </main>
            <Footer />
        </div>
    }
}

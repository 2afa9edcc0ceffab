use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod navbar;
    pub mod hero;
    pub mod science;
    pub mod how_to_use;
    pub mod ingredients;
    pub mod product_details;
    pub mod use_cases;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod shop;
    pub mod not_found;
}
mod shop {
    pub mod catalog;
    pub mod countdown;
    pub mod browser;
}
mod utils {
    pub mod in_view;
    pub mod touch;
}

use pages::{landing::Landing, not_found::NotFound, shop::Shop};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/shop")]
    Shop,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Shop => html! { <Shop /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("{} storefront starting", config::BRAND);
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::prelude::*;

mod auth {
    pub mod clerk;
}
mod checkout;
mod components {
    pub mod theme_toggle;
    pub mod toast;
}
mod config;
mod content;
mod hooks {
    pub mod use_theme;
}
mod navigation;
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod payments {
    pub mod stripe;
}
mod theme;
mod toast;
mod utils {
    pub mod api;
}

use auth::clerk::AuthProvider;
use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Lock-In landing page starting");
    yew::Renderer::<App>::new().render();
}

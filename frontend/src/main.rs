use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod models;
mod links;
mod clipboard;
mod contact;
mod seo;
mod history {
    pub mod controller;
    pub mod browser;
}
mod samples {
    pub mod manifest;
    pub mod filter;
    pub mod drive;
}
mod components {
    pub mod layout;
    pub mod dialog;
    pub mod service_card;
    pub mod sample_card;
    pub mod share_button;
    pub mod lightbox;
    pub mod media_gallery;
    pub mod structured_data;
}
mod modals {
    pub mod plans;
    pub mod service_modal;
    pub mod smm_samples;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod contact;
    pub mod samples;
    pub mod website_samples;
    pub mod not_found;
}

use pages::{
    home::Home,
    services::Services,
    contact::Contact,
    samples::Samples,
    website_samples::WebsiteSamples,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[at("/samples")]
    Samples,
    #[at("/samples/websites")]
    WebsiteSamples,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Samples => {
            info!("Rendering Samples page");
            html! { <Samples /> }
        },
        Route::WebsiteSamples => {
            info!("Rendering Website Samples page");
            html! { <WebsiteSamples /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

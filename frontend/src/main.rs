use log::{info, Level};
use yew::prelude::*;

mod config;
mod waitlist {
    pub mod controller;
    pub mod form;
    pub mod sink;
}
mod reveal {
    pub mod script;
    pub mod sequencer;
}
mod components {
    pub mod modal;
    pub mod phone_mockup;
    pub mod signup_form;
    pub mod theme;
    pub mod viewport;
}
mod pages {
    pub mod features;
    pub mod footer;
    pub mod landing;
    pub mod wealth_coach;
}

use components::theme::ThemeProvider;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <Landing />
        </ThemeProvider>
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

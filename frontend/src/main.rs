use yew::prelude::*;

mod api;
mod clock;
mod config;
mod monitor;
mod route_card;
mod styles;

use crate::monitor::Monitor;

#[function_component(App)]
fn app() -> Html {
    html! { <Monitor /> }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

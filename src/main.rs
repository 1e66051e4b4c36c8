mod components;
mod context;
mod models;
mod router;
mod services;
mod utils;
mod views;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚗 Car Sell starting...");

    yew::Renderer::<App>::new().render();
}

//! To-Do Frontend Entry Point

mod app;
mod components;
mod error;
mod logging;
mod models;
mod store;
mod todo;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::log_info("APP", "Mounting to-do widget");
    mount_to_body(App);
}

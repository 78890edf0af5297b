use wasm_bindgen::prelude::*;

mod app;
pub mod components;
pub mod job_result;
pub mod progress;

pub use components::running_status_indicator::{RunningStatusIndicator, RunningStatusIndicatorProps};
pub use components::status_indicator::{StatusIndicator, StatusIndicatorProps};
pub use job_result::{decode_result_value, JobResult};

#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}

pub mod app;
pub mod conf;
pub mod gallery;
pub mod keyboard;
pub mod lightbox;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	console_error_panic_hook::set_once();
	leptos::mount::hydrate_islands();
}

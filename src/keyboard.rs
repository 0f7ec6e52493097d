//! Global keyboard handlers
//!
//! Installs the document-level listener that drives lightbox navigation.

/// Registers the lightbox key listener on the document. Only the first call on a page has any effect.
#[cfg(not(feature = "ssr"))]
pub fn use_lightbox_keys() {
	use std::cell::Cell;

	thread_local! {
		static INSTALLED: Cell<bool> = const { Cell::new(false) };
	}

	if INSTALLED.with(Cell::get) {
		return;
	}
	match install() {
		Ok(()) => INSTALLED.with(|i| i.set(true)),
		Err(e) => leptos::logging::warn!("lightbox keys not installed: {e:?}"),
	}
}

#[cfg(not(feature = "ssr"))]
fn install() -> Result<(), wasm_bindgen::JsValue> {
	use wasm_bindgen::{JsCast, JsValue, closure::Closure};

	use crate::lightbox::{KeyNavigationHandler, dom::Dom};

	let document = web_sys::window().and_then(|w| w.document()).ok_or_else(|| JsValue::from_str("no document"))?;
	let dom = Dom::new(document);
	let target = dom.document().clone();
	let handler = KeyNavigationHandler::new(dom.clone(), dom);

	let closure = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
		handler.handle_key(&e.key());
	});
	target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

#[cfg(feature = "ssr")]
pub fn use_lightbox_keys() {}

//! `web_sys` implementation of the lightbox page traits.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{Activate, ControlLookup, ControlRole, NavigationState};

#[derive(Clone, Debug)]
pub struct Dom {
	document: Document,
}

impl Dom {
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	pub fn document(&self) -> &Document {
		&self.document
	}
}

impl NavigationState for Dom {
	fn fragment(&self) -> String {
		self.document.location().and_then(|l| l.hash().ok()).unwrap_or_default()
	}
}

impl ControlLookup for Dom {
	type Container = Element;
	type Control = HtmlElement;

	fn container(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}

	fn control(&self, container: &Element, role: ControlRole) -> Option<HtmlElement> {
		// `click()` only exists on HTML elements; an SVG match is treated as absent
		container.query_selector(role.selector()).ok().flatten().and_then(|e| e.dyn_into::<HtmlElement>().ok())
	}
}

impl Activate for HtmlElement {
	fn activate(&self) {
		self.click();
	}
}

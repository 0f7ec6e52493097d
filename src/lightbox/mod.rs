//! Keyboard navigation for fragment-addressed lightboxes.
//!
//! A lightbox is "open" when the URL fragment names its container. Arrow keys and Escape are forwarded as clicks
//! to the `prev`/`next`/`close` controls inside that container; everything else is left alone.

#[cfg(not(feature = "ssr"))]
pub mod dom;

use derive_more::Display;
use derive_new::new;

/// The three controls a lightbox container may carry.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ControlRole {
	#[display("previous")]
	Previous,
	#[display("next")]
	Next,
	#[display("close")]
	Close,
}

impl ControlRole {
	pub const ALL: [ControlRole; 3] = [ControlRole::Previous, ControlRole::Next, ControlRole::Close];

	/// Exact, case-sensitive match on `KeyboardEvent.key`.
	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"ArrowLeft" => Some(Self::Previous),
			"ArrowRight" => Some(Self::Next),
			"Escape" => Some(Self::Close),
			_ => None,
		}
	}

	pub fn selector(self) -> &'static str {
		match self {
			Self::Previous => ".lbprev",
			Self::Next => ".lbnext",
			Self::Close => ".lbclose",
		}
	}

	/// Class the gallery markup puts on the control: the selector without its leading `.`.
	pub fn class(self) -> &'static str {
		&self.selector()[1..]
	}
}

/// Source of the current URL fragment, as `location.hash` reports it (`""` or `"#id"`).
pub trait NavigationState {
	fn fragment(&self) -> String;
}

/// Element lookups the handler needs from the page.
pub trait ControlLookup {
	type Container;
	type Control: Activate;

	/// Element whose id is exactly `id`.
	fn container(&self, id: &str) -> Option<Self::Container>;
	/// First descendant of `container` carrying `role`. Must never look outside `container`.
	fn control(&self, container: &Self::Container, role: ControlRole) -> Option<Self::Control>;
}

/// Simulated user activation, delegating to whatever behaviour the element already has.
pub trait Activate {
	fn activate(&self);
}

/// Strips the leading `#`. `None` when no lightbox is addressed.
pub fn active_fragment(hash: &str) -> Option<&str> {
	let id = hash.strip_prefix('#').unwrap_or(hash);
	(!id.is_empty()).then_some(id)
}

/// Forwards lightbox keys to the controls of the lightbox named by the URL fragment.
///
/// Stateless: the fragment and the page are consulted afresh on every key.
#[derive(Clone, Debug, new)]
pub struct KeyNavigationHandler<N, P> {
	navigation: N,
	page: P,
}

impl<N: NavigationState, P: ControlLookup> KeyNavigationHandler<N, P> {
	/// Any unmet condition is a silent no-op.
	pub fn handle_key(&self, key: &str) {
		let hash = self.navigation.fragment();
		let Some(id) = active_fragment(&hash) else {
			return;
		};
		let Some(role) = ControlRole::from_key(key) else {
			return;
		};
		let Some(container) = self.page.container(id) else {
			return;
		};
		if let Some(control) = self.page.control(&container, role) {
			control.activate();
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{cell::RefCell, rc::Rc};

	use super::*;

	#[derive(Clone, Default)]
	struct Location(Rc<RefCell<String>>);
	impl Location {
		fn set(&self, hash: &str) {
			*self.0.borrow_mut() = hash.to_owned();
		}
	}
	impl NavigationState for Location {
		fn fragment(&self) -> String {
			self.0.borrow().clone()
		}
	}

	struct Node {
		id: Option<&'static str>,
		class: Option<&'static str>,
		parent: Option<usize>,
	}

	/// Flat element tree in document order; `parent` links give subtree membership.
	#[derive(Clone, Default)]
	struct Page {
		nodes: Rc<RefCell<Vec<Node>>>,
		clicks: Rc<RefCell<Vec<usize>>>,
	}
	impl Page {
		fn add(&self, id: Option<&'static str>, class: Option<&'static str>, parent: Option<usize>) -> usize {
			let mut nodes = self.nodes.borrow_mut();
			nodes.push(Node { id, class, parent });
			nodes.len() - 1
		}

		fn lightbox(&self, id: &'static str, roles: &[ControlRole]) -> (usize, Vec<usize>) {
			let container = self.add(Some(id), Some("lightbox"), None);
			let img = self.add(None, None, Some(container));
			let controls = roles.iter().map(|r| self.add(None, Some(r.class()), Some(img))).collect();
			(container, controls)
		}

		fn is_descendant(&self, node: usize, ancestor: usize) -> bool {
			let nodes = self.nodes.borrow();
			let mut cur = nodes[node].parent;
			while let Some(p) = cur {
				if p == ancestor {
					return true;
				}
				cur = nodes[p].parent;
			}
			false
		}

		fn clicks(&self) -> Vec<usize> {
			self.clicks.borrow().clone()
		}
	}

	struct Control {
		node: usize,
		clicks: Rc<RefCell<Vec<usize>>>,
	}
	impl Activate for Control {
		fn activate(&self) {
			self.clicks.borrow_mut().push(self.node);
		}
	}

	impl ControlLookup for Page {
		type Container = usize;
		type Control = Control;

		fn container(&self, id: &str) -> Option<usize> {
			self.nodes.borrow().iter().position(|n| n.id == Some(id))
		}

		fn control(&self, container: &usize, role: ControlRole) -> Option<Control> {
			let len = self.nodes.borrow().len();
			(0..len)
				.find(|&i| self.nodes.borrow()[i].class == Some(role.class()) && self.is_descendant(i, *container))
				.map(|node| Control { node, clicks: self.clicks.clone() })
		}
	}

	fn setup() -> (Location, Page, KeyNavigationHandler<Location, Page>) {
		let location = Location::default();
		let page = Page::default();
		let handler = KeyNavigationHandler::new(location.clone(), page.clone());
		(location, page, handler)
	}

	#[test]
	fn key_mapping_is_exact() {
		assert_eq!(ControlRole::from_key("ArrowLeft"), Some(ControlRole::Previous));
		assert_eq!(ControlRole::from_key("ArrowRight"), Some(ControlRole::Next));
		assert_eq!(ControlRole::from_key("Escape"), Some(ControlRole::Close));
		for key in ["arrowleft", "ARROWRIGHT", "Esc", "Left", "ArrowUp", " ", "", "Escape "] {
			assert_eq!(ControlRole::from_key(key), None, "{key:?}");
		}
	}

	#[test]
	fn selector_matches_class() {
		for role in ControlRole::ALL {
			assert_eq!(role.selector(), format!(".{}", role.class()));
		}
		assert_eq!(ControlRole::ALL.map(ControlRole::class), ["lbprev", "lbnext", "lbclose"]);
		assert_eq!(ControlRole::Previous.to_string(), "previous");
	}

	#[test]
	fn fragment_marker_is_stripped() {
		assert_eq!(active_fragment("#photo1"), Some("photo1"));
		assert_eq!(active_fragment(""), None);
		assert_eq!(active_fragment("#"), None);
	}

	#[test]
	fn each_key_clicks_its_control() {
		let (location, page, handler) = setup();
		let (_, controls) = page.lightbox("photo1", &ControlRole::ALL);
		location.set("#photo1");

		handler.handle_key("ArrowLeft");
		assert_eq!(page.clicks(), vec![controls[0]]);
		handler.handle_key("ArrowRight");
		assert_eq!(page.clicks(), vec![controls[0], controls[1]]);
		handler.handle_key("Escape");
		assert_eq!(page.clicks(), controls);
	}

	#[test]
	fn other_keys_do_nothing() {
		let (location, page, handler) = setup();
		page.lightbox("photo1", &ControlRole::ALL);
		location.set("#photo1");

		for key in ["a", "Enter", "ArrowUp", "ArrowDown", "arrowleft", "Tab", "Esc"] {
			handler.handle_key(key);
		}
		assert!(page.clicks().is_empty());
	}

	#[test]
	fn no_fragment_means_no_lightbox() {
		let (location, page, handler) = setup();
		page.lightbox("photo1", &ControlRole::ALL);

		for hash in ["", "#"] {
			location.set(hash);
			for key in ["ArrowLeft", "ArrowRight", "Escape"] {
				handler.handle_key(key);
			}
		}
		assert!(page.clicks().is_empty());
	}

	#[test]
	fn unknown_container_does_nothing() {
		let (location, page, handler) = setup();
		page.lightbox("photo1", &ControlRole::ALL);
		location.set("#photo2");

		for key in ["ArrowLeft", "ArrowRight", "Escape"] {
			handler.handle_key(key);
		}
		assert!(page.clicks().is_empty());
	}

	#[test]
	fn missing_control_does_nothing() {
		let (location, page, handler) = setup();
		let (_, controls) = page.lightbox("first", &[ControlRole::Next, ControlRole::Close]);
		location.set("#first");

		handler.handle_key("ArrowLeft");
		assert!(page.clicks().is_empty());
		handler.handle_key("ArrowRight");
		assert_eq!(page.clicks(), vec![controls[0]]);
	}

	#[test]
	fn clicks_stay_inside_addressed_container() {
		let (location, page, handler) = setup();
		let (_, other) = page.lightbox("photo1", &ControlRole::ALL);
		let (_, own) = page.lightbox("photo2", &[ControlRole::Close]);
		// stray control at top level
		page.add(None, Some(ControlRole::Next.class()), None);
		location.set("#photo2");

		handler.handle_key("ArrowLeft");
		handler.handle_key("ArrowRight");
		assert!(page.clicks().is_empty());

		handler.handle_key("Escape");
		assert_eq!(page.clicks(), own);
		assert!(!page.clicks().contains(&other[2]));
	}

	#[test]
	fn fragment_is_read_on_every_key() {
		let (location, page, handler) = setup();
		let (_, a) = page.lightbox("a", &ControlRole::ALL);
		let (_, b) = page.lightbox("b", &ControlRole::ALL);

		location.set("#a");
		handler.handle_key("ArrowRight");
		location.set("#b");
		handler.handle_key("ArrowRight");
		location.set("");
		handler.handle_key("ArrowRight");

		assert_eq!(page.clicks(), vec![a[1], b[1]]);
	}

	#[test]
	fn repeated_keys_are_not_deduplicated() {
		let (location, page, handler) = setup();
		let (_, controls) = page.lightbox("photo1", &ControlRole::ALL);
		location.set("#photo1");

		for _ in 0..3 {
			handler.handle_key("ArrowRight");
		}
		assert_eq!(page.clicks(), vec![controls[1]; 3]);
	}
}

use derive_new::new;
use leptos::{html::*, prelude::*};
use leptos_meta::{Link, Title, TitleProps};
use serde::{Deserialize, Serialize};

use crate::{conf::Settings, lightbox::ControlRole};

#[cfg(feature = "ssr")]
pub mod scan;

/// Fragment the close control navigates to. Photo ids never take this value, so no lightbox matches it.
pub const CLOSE_FRAGMENT: &str = "_";

/// Every photo id starts with this, keeping lightbox ids apart from the ids the shell emits (`leptos` stylesheet etc).
pub const PHOTO_ID_PREFIX: &str = "p-";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Photo {
	/// Element id of the photo's lightbox container, and the fragment that opens it.
	pub id: String,
	pub src: String,
	pub caption: String,
}

/// A photo together with the ids its previous/next controls link to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxEntry {
	pub photo: Photo,
	pub prev: Option<String>,
	pub next: Option<String>,
}

/// Neighbours in display order. No wrap-around: the first photo has no previous control, the last no next.
pub fn lightbox_entries(photos: &[Photo]) -> Vec<LightboxEntry> {
	photos
		.iter()
		.enumerate()
		.map(|(i, photo)| LightboxEntry {
			photo: photo.clone(),
			prev: i.checked_sub(1).map(|j| photos[j].id.clone()),
			next: photos.get(i + 1).map(|p| p.id.clone()),
		})
		.collect()
}

#[server(ListPhotos)]
pub async fn list_photos() -> Result<Vec<Photo>, ServerFnError> {
	let settings = use_context::<Settings>().ok_or_else(|| ServerFnError::new("Settings not available"))?;
	scan::load_photos(settings.gallery.dir, settings.gallery.url_prefix).await.map_err(|e| ServerFnError::new(format!("Photo scan failed: {e}")))
}

#[component]
pub fn GalleryView() -> impl IntoView {
	let Settings { gallery, site_url } = use_context::<Settings>().unwrap_or_default();
	let title = gallery.title;
	let photos = Resource::new(|| (), |_| async move { list_photos().await });

	section().class("max-w-5xl mx-auto px-4 py-8").child((
		Title(TitleProps {
			formatter: None,
			text: Some(title.clone().into()),
		}),
		view! { <Link rel="canonical" href=site_url /> },
		h1().class("text-2xl font-bold mb-6").child(title),
		Suspense(SuspenseProps {
			fallback: { || p().class("text-gray-500").child("Loading...") }.into(),
			children: ToChildren::to_children(move || {
				IntoRender::into_render(move || match photos.get() {
					Some(Ok(photos)) if photos.is_empty() => p().class("text-gray-500").child("No photos yet.").into_any(),
					Some(Ok(photos)) => Gallery(GalleryProps { photos }).into_any(),
					Some(Err(e)) => p().class("text-red-600").child(format!("Error loading photos: {e}")).into_any(),
					None => p().class("text-gray-500").child("Loading...").into_any(),
				})
			}),
		}),
		LightboxKeys(),
	))
}

#[component]
fn Gallery(photos: Vec<Photo>) -> impl IntoView {
	let thumbs = photos
		.iter()
		.map(|photo| {
			a().attr("href", format!("#{}", photo.id)).class("block").child(
				img()
					.attr("src", photo.src.clone())
					.attr("alt", photo.caption.clone())
					.attr("loading", "lazy")
					.class("w-full h-40 object-cover rounded hover:opacity-80 transition-opacity"),
			)
		})
		.collect::<Vec<_>>();
	let lightboxes = lightbox_entries(&photos).into_iter().map(lightbox).collect::<Vec<_>>();

	(div().class("grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-3").child(thumbs), lightboxes)
}

fn lightbox(entry: LightboxEntry) -> impl IntoView {
	let LightboxEntry { photo, prev, next } = entry;
	div().attr("id", photo.id).class("lightbox").child((
		control(ControlRole::Close, CLOSE_FRAGMENT, "×"),
		prev.map(|id| control(ControlRole::Previous, &id, "‹")),
		figure().child((img().attr("src", photo.src).attr("alt", photo.caption.clone()), figcaption().child(photo.caption))),
		next.map(|id| control(ControlRole::Next, &id, "›")),
	))
}

fn control(role: ControlRole, target: &str, glyph: &'static str) -> impl IntoView {
	a().attr("href", format!("#{target}")).attr("aria-label", role.to_string()).class(role.class()).child(glyph)
}

#[island]
fn LightboxKeys() -> impl IntoView {
	crate::keyboard::use_lightbox_keys();
}

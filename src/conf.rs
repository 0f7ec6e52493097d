extern crate clap;

use std::path::PathBuf;

#[derive(Clone, Debug, v_utils::macros::MyConfigPrimitives)]
#[cfg_attr(feature = "ssr", derive(v_utils::macros::Settings))]
pub struct Settings {
	#[serde(default)]
	pub gallery: GalleryConf,
	/// Public base URL of the site (canonical link)
	#[serde(default = "__default_site_url")]
	#[primitives(skip)]
	pub site_url: String,
}

fn __default_site_url() -> String {
	"http://localhost:61156".to_string()
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			gallery: GalleryConf::default(),
			site_url: __default_site_url(),
		}
	}
}

#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct GalleryConf {
	/// Directory scanned for images on every page load
	#[serde(default = "__default_gallery_dir")]
	pub dir: PathBuf,
	/// URL under which `dir` is served. With cargo-leptos, `public/photos` ends up at `/photos`.
	#[serde(default = "__default_gallery_url_prefix")]
	pub url_prefix: String,
	#[serde(default = "__default_gallery_title")]
	pub title: String,
}

impl Default for GalleryConf {
	fn default() -> Self {
		Self {
			dir: __default_gallery_dir(),
			url_prefix: __default_gallery_url_prefix(),
			title: __default_gallery_title(),
		}
	}
}

fn __default_gallery_dir() -> PathBuf {
	PathBuf::from("public/photos")
}

fn __default_gallery_url_prefix() -> String {
	"/photos".to_string()
}

fn __default_gallery_title() -> String {
	"Gallery".to_string()
}

use std::{
	collections::HashSet,
	fs,
	path::{Path, PathBuf},
};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, error, instrument, warn};

use super::{PHOTO_ID_PREFIX, Photo};

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "avif"];

/// Everything but the RFC 3986 unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// [scan_photos] off the async workers.
pub async fn load_photos(dir: PathBuf, url_prefix: String) -> Result<Vec<Photo>, tokio::task::JoinError> {
	tokio::task::spawn_blocking(move || scan_photos(&dir, &url_prefix)).await
}

/// Lists the images in `dir`, sorted by file name.
/// Ids are `PHOTO_ID_PREFIX` + a slug of the file stem, unique, usable as element ids and URL fragments.
#[instrument]
pub fn scan_photos(dir: &Path, url_prefix: &str) -> Vec<Photo> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) => {
			error!("Failed to read photo directory {:?}: {}", dir, e);
			return Vec::new();
		}
	};

	let mut files: Vec<String> = entries
		.filter_map(|entry| match entry {
			Ok(entry) => Some(entry),
			Err(e) => {
				warn!("Skipping unreadable entry in {:?}: {}", dir, e);
				None
			}
		})
		.filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
		.filter_map(|entry| match entry.file_name().into_string() {
			Ok(name) => Some(name),
			Err(name) => {
				warn!("Skipping non-UTF-8 file name {:?}", name);
				None
			}
		})
		.filter(|name| is_image(name))
		.collect();
	files.sort();

	let mut taken = HashSet::new();
	let photos: Vec<Photo> = files
		.into_iter()
		.map(|name| {
			let stem = name.rsplit_once('.').map_or(name.as_str(), |(stem, _)| stem);
			let id = unique(format!("{PHOTO_ID_PREFIX}{}", to_slug(stem)), &mut taken);
			let caption = to_caption(stem);
			let src = format!("{}/{}", url_prefix.trim_end_matches('/'), utf8_percent_encode(&name, PATH_SEGMENT));
			Photo { id, src, caption }
		})
		.collect();
	debug!("Found {} photos in {:?}", photos.len(), dir);
	photos
}

fn is_image(name: &str) -> bool {
	name.rsplit_once('.').is_some_and(|(_, ext)| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Lowercase; everything outside `[a-z0-9_]` becomes a single `-`.
/// ASCII only: `location.hash` reports non-ASCII percent-encoded, which would no longer match the element id.
fn to_slug(stem: &str) -> String {
	let mut slug = String::with_capacity(stem.len());
	for c in stem.chars().flat_map(char::to_lowercase) {
		if c.is_ascii_alphanumeric() || c == '_' {
			slug.push(c);
		} else if !slug.ends_with('-') {
			slug.push('-');
		}
	}
	let slug = slug.trim_matches(|c| c == '-' || c == '_');
	if slug.is_empty() { "photo".to_string() } else { slug.to_string() }
}

fn unique(base: String, taken: &mut HashSet<String>) -> String {
	if taken.insert(base.clone()) {
		return base;
	}
	let mut n = 2;
	loop {
		let candidate = format!("{base}-{n}");
		if taken.insert(candidate.clone()) {
			return candidate;
		}
		n += 1;
	}
}

/// "my_summer-trip" -> "My Summer Trip"
fn to_caption(stem: &str) -> String {
	stem.replace(['_', '-'], " ")
		.split_whitespace()
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				None => String::new(),
				Some(c) => c.to_uppercase().chain(chars).collect(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

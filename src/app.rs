use leptos::{html::*, prelude::*};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, provide_meta_context};
use leptos_routable::prelude::*;
use leptos_router::components::{A, AProps, Router};

pub use crate::gallery::GalleryView;

pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				<AutoReload options=options.clone() />
				<HydrationScripts options islands=true />
				<MetaTags />
			</head>
			<body>
				<App />
			</body>
		</html>
	}
}

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	(
		Stylesheet(StylesheetProps {
			id: Some("leptos".to_owned()),
			href: format!("/pkg/{}.css", env!("CARGO_PKG_NAME")),
		}),
		view! {
			<Router>
				<main class="min-h-screen">{move || AppRoutes::routes()}</main>
			</Router>
		},
	)
}

#[derive(Routable)]
#[routes(view_prefix = "", view_suffix = "View", transition = false)]
pub enum AppRoutes {
	#[route(path = "/")]
	Gallery,
	#[fallback]
	#[route(path = "/404")]
	NotFound,
}

#[component]
pub fn NotFoundView() -> impl IntoView {
	div().class("p-4 text-center").child((
		h1().class("text-2xl font-bold").child("404"),
		p().child("Sorry, we can't find that page"),
		A(AProps {
			href: AppRoutes::Gallery.to_string(),
			children: Box::new(|| view! { "Back to the gallery" }.into_any()),
			target: None,
			exact: false,
			strict_trailing_slash: false,
			scroll: true,
		})
		.attr("class", "inline-block px-4 py-2 bg-green-500 text-white rounded mt-4"),
	))
}

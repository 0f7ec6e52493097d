#[cfg(feature = "ssr")]
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[clap(flatten)]
	settings: gallery::conf::SettingsFlags,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
	use axum::Router;
	use clap::Parser as _;
	use color_eyre::eyre::WrapErr as _;
	use gallery::{app::*, conf::Settings};
	use leptos::prelude::*;
	use leptos_axum::{LeptosRoutes, generate_route_list};
	use tracing::{debug, info};

	v_utils::clientside!();
	let cli = Cli::parse();
	let settings = Settings::try_build(cli.settings)?;
	info!(dir = ?settings.gallery.dir, url_prefix = %settings.gallery.url_prefix, "serving gallery");

	let conf = get_configuration(None).wrap_err("reading leptos configuration")?;
	let addr = conf.leptos_options.site_addr;
	let leptos_options = conf.leptos_options;

	let routes = generate_route_list(App);
	debug!(?routes);

	let app = Router::new()
		.leptos_routes_with_context(&leptos_options, routes, move || provide_context(settings.clone()), {
			let leptos_options = leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(leptos_axum::file_and_error_handler(shell))
		.with_state(leptos_options);

	let listener = tokio::net::TcpListener::bind(&addr).await.wrap_err_with(|| format!("binding {addr}"))?;
	info!("listening on http://{}", &addr);
	axum::serve(listener, app.into_make_service()).await?;
	Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// hydration is bootstrapped in [./lib.rs]
	panic!("not the correct access point");
}

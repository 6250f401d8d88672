#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use comment_board::{app::App, config::Config};
    use leptos::get_configuration;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::{services::ServeDir, trace::TraceLayer};

    Config::init()?;
    let config = Config::global();
    tracing_subscriber::fmt()
        .with_max_level(config.environment.log_level())
        .init();

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .fallback_service(ServeDir::new(site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("serving the board on http://{addr}, API at {}", config.api_url);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the client entry point is `hydrate` in lib.rs
}

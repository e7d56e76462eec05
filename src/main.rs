#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use internlink::app::*;
    use internlink::core::config::Config;
    use internlink::core::proxy::{ProxyState, api_proxy_router};
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    // Log config status (without revealing values)
    tracing::info!(
        "Config loaded: api_upstream={}",
        if config.has_api_upstream() {
            "explicit"
        } else {
            "default"
        }
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        // Serve pre-compressed static assets from /pkg
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Forward /api to the backend REST service
    let api_router = api_proxy_router(ProxyState::new(config.api_upstream()));

    // Build the main application router with compression
    let app = Router::new()
        .merge(api_router)
        // Leptos routes (merged to avoid state conflicts)
        .merge(leptos_router)
        // Add compression with Brotli priority (best compression for web)
        .layer(
            CompressionLayer::new()
                .br(true) // Brotli - best compression ratio
                .gzip(true) // Gzip - wide support fallback
                .quality(CompressionLevel::Best),
        );

    // Run our app with hyper
    log!("listening on http://{}", &addr);
    log!("proxying /api to {}", config.api_upstream());

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}

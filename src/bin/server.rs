use std::{fs::OpenOptions, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use magasinier_rs::{
    build_router, graceful_shutdown, logging_middleware, routes::endpoints,
    stores::sqlite::create_app_state,
};

/// The REST API server for magasinier_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let conn = Connection::open(&args.db_path).unwrap();
    let app_state = create_app_state(conn).expect("Could not initialize the database.");

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router =
        add_tracing_layer(build_router(app_state)).layer(middleware::from_fn(logging_middleware));

    tracing::info!("HTTP server listening on {addr}");
    log_available_endpoints();

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}

fn log_available_endpoints() {
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    {}", endpoints::HEALTH);
    tracing::info!("  GET    {}", endpoints::PRODUCTS);
    tracing::info!("  POST   {}", endpoints::PRODUCTS);
    tracing::info!("  GET    {}", endpoints::PRODUCT);
    tracing::info!("  PUT    {}", endpoints::PRODUCT);
    tracing::info!("  DELETE {}", endpoints::PRODUCT);
    tracing::info!("  GET    {}", endpoints::CATEGORIES);
    tracing::info!("  POST   {}", endpoints::CATEGORIES);
    tracing::info!("  GET    {}", endpoints::CATEGORY);
    tracing::info!("  PUT    {}", endpoints::CATEGORY);
    tracing::info!("  DELETE {}", endpoints::CATEGORY);
}

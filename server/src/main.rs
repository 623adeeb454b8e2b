use app::{component, shell};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use serde_json::json;

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{DefaultPredicate, Predicate as _, SizeAbove};
use tower_http::trace::TraceLayer;

const SERVICE_NAME: &str = "soil-watch";

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let conf = match get_configuration(Some("Cargo.toml")) {
        Ok(conf) => conf,
        Err(err) => {
            logging::error!("Failed to get configuration: {}", err);
            return;
        }
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);
    tracing::debug!(routes = routes.len(), "Generated route list");

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .layer(tower::ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .layer(CompressionLayer::new().compress_when(DefaultPredicate::new().and(SizeAbove::new(1024))))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
            logging::error!("Error details: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_matches_build() {
        if cfg!(debug_assertions) {
            assert_eq!(tracing_level(), tracing::Level::DEBUG);
        } else {
            assert_eq!(tracing_level(), tracing::Level::INFO);
        }
    }

    #[test]
    fn test_health_handler_structure() {
        tokio_test::block_on(async {
            let result = health_handler().await;
            assert!(result.is_ok());

            let json_value = result.unwrap().0;
            assert_eq!(json_value["status"], "healthy");
            assert_eq!(json_value["service"], SERVICE_NAME);
            assert_eq!(json_value["version"], env!("CARGO_PKG_VERSION"));
            assert!(json_value.get("timestamp").is_some());
        });
    }
}

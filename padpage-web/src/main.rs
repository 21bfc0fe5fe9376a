#![deny(missing_docs)]
//! A web server that issues printable one-time pad pages, one per request.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use local_ip_address::local_ip;
use log::error;
use padpage_core::error::PadError;
use padpage_core::page_builder::{self, PageLayout};
use padpage_core::symbol_source::OsSymbolSource;
use serde::Deserialize;
use std::env;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

mod render;

/// Optional layout overrides accepted on the page URL.
#[derive(Deserialize)]
struct PageParams {
    messages: Option<usize>,
    rows: Option<usize>,
    groups: Option<usize>,
    group_size: Option<usize>,
}

impl PageParams {
    /// Fills any omitted dimension from the default layout.
    fn layout(&self) -> PageLayout {
        let defaults = PageLayout::default();
        PageLayout {
            message_count: self.messages.unwrap_or(defaults.message_count),
            row_count: self.rows.unwrap_or(defaults.row_count),
            group_count: self.groups.unwrap_or(defaults.group_count),
            group_size: self.group_size.unwrap_or(defaults.group_size),
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // Read the listen port from the environment or use the default.
    let port = env::var("PADPAGE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    // Build the Axum router.
    let app = Router::new()
        .route("/one_time_pad", get(one_time_pad_handler))
        .route("/", get(|| async { Redirect::permanent("/one_time_pad") }))
        .layer(CorsLayer::permissive());

    // Run the server.
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let my_local_ip = local_ip().unwrap();

    println!("listening on:");
    println!("  - http://{my_local_ip}:{port}/one_time_pad");
    println!("  - http://127.0.0.1:{port}/one_time_pad");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Serves one freshly generated pad page as printable HTML.
///
/// Every request draws new key material; the page is never stored and cannot
/// be retrieved again once the response is sent.
async fn one_time_pad_handler(Query(params): Query<PageParams>) -> impl IntoResponse {
    let layout = params.layout();
    let mut source = OsSymbolSource;

    match page_builder::generate_page(&mut source, &layout) {
        Ok(page) => Html(render::page_html(&page)).into_response(),
        Err(e @ PadError::Configuration(_)) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => {
            error!("Page generation failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to generate page".to_string(),
            )
                .into_response()
        }
    }
}

//! HTTP server setup module for the content server.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::api;
use crate::model::AppState;

/// Creates and binds the content HTTP server.
///
/// The server exposes the read-only content endpoints consumed by page
/// rendering, the admin write path, and the health probe.
pub fn content_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(api::health::health)
            .service(api::route::routes())
    })
    .bind((address, port))?
    .run())
}

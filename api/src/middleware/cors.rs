//! CORS configuration
//!
//! The API is consumed by first-party web and mobile clients; origins are
//! left open and only the methods the surface actually uses are allowed.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Create the CORS middleware for the service.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

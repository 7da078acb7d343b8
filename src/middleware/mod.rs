//! Camadas aplicadas ao router
//!
//! - Cabeçalho CORS em todas as respostas
//! - Captura de panics com resposta 500 genérica

pub mod panic_handler;

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

pub use panic_handler::handle_panic;

/// `Access-Control-Allow-Origin: *` em toda resposta, inclusive 404/405 do router
pub fn cors_header_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))
}

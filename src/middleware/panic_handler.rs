//! Conversão de panics em respostas HTTP válidas
//!
//! Usado com `tower_http::catch_panic::CatchPanicLayer`: mesmo com panic no
//! handler o gateway recebe o 500 genérico, sem detalhes internos.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::utils::AppError;

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    AppError::InternalError(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

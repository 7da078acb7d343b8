// Biblioteca da Lambda de autenticação por CPF
// Expõe módulos para uso em testes e no binário

pub mod auth;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod utils;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    /// Cliente do provedor, criado uma vez por processo
    pub provider: Arc<dyn auth::IdentityProvider>,
}

/// Monta o router usado tanto no Lambda quanto no servidor local.
///
/// Qualquer rota/método cai no handler de autenticação; o gateway decide
/// o caminho público.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .fallback(handlers::auth_by_cpf)
        .with_state(state)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_header_layer())
}

/// O runtime do Lambda exporta AWS_LAMBDA_RUNTIME_API para o processo
pub fn is_lambda_environment() -> bool {
    std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok()
}

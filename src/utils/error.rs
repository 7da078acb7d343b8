use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::auth::ProviderError;
use crate::utils::logging::log_unexpected_error;

/// Mensagens devolvidas ao cliente. Nunca incluem detalhes internos.
pub const MSG_MALFORMED_REQUEST: &str = "Corpo da requisição em formato JSON inválido";
pub const MSG_MISSING_NAME: &str = "Parâmetro \"name\" é obrigatório";
pub const MSG_USER_NOT_FOUND: &str = "Cliente não encontrado";
pub const MSG_INTERNAL_ERROR: &str = "Erro interno no servidor";

#[derive(Debug, Error)]
pub enum AppError {
    /// Falha de configuração na inicialização (fatal)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Corpo da requisição não é um objeto JSON válido
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    /// Campo obrigatório ausente ou vazio
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Nenhum usuário encontrado no diretório
    #[error("User not found")]
    UserNotFound,

    /// Qualquer outra falha. A causa vai para o log, nunca para a resposta.
    #[error("Internal error: {0:#}")]
    InternalError(#[source] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedRequest(_) | AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::ConfigError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensagem pública exposta no campo `error` da resposta
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MalformedRequest(_) => MSG_MALFORMED_REQUEST,
            AppError::MissingParameter(_) => MSG_MISSING_NAME,
            AppError::UserNotFound => MSG_USER_NOT_FOUND,
            AppError::ConfigError(_) | AppError::InternalError(_) => MSG_INTERNAL_ERROR,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::InternalError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InternalError(cause) => log_unexpected_error(&format!("{:#}", cause)),
            AppError::ConfigError(msg) => log_unexpected_error(msg),
            _ => {}
        }

        let body = json!({ "error": self.public_message() });
        (self.status_code(), axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

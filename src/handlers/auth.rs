//! Handler de autenticação por nome/CPF
//!
//! Fluxo linear por invocação:
//! 1. Interpreta o corpo JSON e extrai `name`
//! 2. `ListUsers` no diretório com filtro pelo atributo `name`
//! 3. `AdminInitiateAuth` (sem senha) para o primeiro usuário encontrado
//! 4. Devolve `id_token` e `refresh_token`
//!
//! Qualquer falha fora das previstas vira `AppError::InternalError` (500).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, Uri},
    Json,
};

use crate::auth::{IdentityProvider, TokenResult, UserFilter};
use crate::models::{AuthRequest, AuthSuccessResponse};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

pub async fn auth_by_cpf(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AuthSuccessResponse>, AppError> {
    log_request_received(uri.path(), method.as_str());

    // Corpo acima do limite ou ilegível cai no erro genérico, em JSON
    let body = body.map_err(|e| AppError::InternalError(anyhow::anyhow!("failed to read request body: {}", e)))?;

    let request = AuthRequest::from_body(&body).map_err(|e| {
        log_validation_error("body", &e.to_string());
        e
    })?;

    let tokens = authenticate(state.provider.as_ref(), &request.name).await?;

    Ok(Json(tokens.into()))
}

/// Busca o usuário pelo nome e emite tokens para ele.
///
/// Cada chamada ao provedor é feita uma única vez, sem retentativa.
pub async fn authenticate(provider: &dyn IdentityProvider, name: &str) -> AppResult<TokenResult> {
    let users = provider.list_users(&UserFilter::by_name(name)).await?;
    log_user_lookup(users.len());

    // Primeiro resultado vence; a ordem é a do provedor
    let user = match users.into_iter().next() {
        Some(user) => user,
        None => {
            log_user_not_found();
            return Err(AppError::UserNotFound);
        }
    };

    let username = user
        .username
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("directory user without Username")))?;

    let tokens = provider.admin_initiate_auth(&username).await?;
    log_tokens_issued();

    Ok(tokens)
}

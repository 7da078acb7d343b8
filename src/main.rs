//! Lambda de autenticação por CPF
//!
//! Fluxo por invocação:
//! - API Gateway entrega o corpo `{ "name": "..." }`
//! - Cognito ListUsers localiza o usuário pelo atributo `name`
//! - Cognito AdminInitiateAuth (ADMIN_NO_SRP_AUTH) emite os tokens
//!
//! Fora do Lambda o mesmo router sobe como servidor HTTP local.

use std::sync::Arc;

use tokio::net::TcpListener;

use cpf_auth_lambda::auth::CognitoIdentityProvider;
use cpf_auth_lambda::config::Settings;
use cpf_auth_lambda::utils::{logging::*, AppError};
use cpf_auth_lambda::{build_router, is_lambda_environment, AppState};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // 🔧 Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let lambda_mode = is_lambda_environment();
    init_tracing(lambda_mode);

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    } else {
        // No Lambda não existe .env - variáveis vêm do template
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // USER_POOL_ID e CLIENT_ID ausentes encerram o processo
    let settings = Settings::new()
        .map_err(|e| AppError::ConfigError(format!("Failed to load settings: {}", e)))?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    // Cliente Cognito criado uma vez e reutilizado entre invocações
    let provider = CognitoIdentityProvider::from_settings(&settings.cognito).await;
    let app_state = Arc::new(AppState {
        provider: Arc::new(provider),
    });

    let app = build_router(app_state);

    if lambda_mode {
        log_lambda_startup();
        return lambda_http::run(app).await;
    }

    log_warning("⚠️ AWS_LAMBDA_RUNTIME_API ausente - subindo servidor HTTP local");

    let port = settings.server.port;
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port)).await?;

    log_server_startup(port);
    log_server_ready(&settings.server.host, port);

    axum::serve(listener, app).await?;

    Ok(())
}

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Inicializa o subscriber do tracing.
///
/// No Lambda o CloudWatch já registra o horário de ingestão, então timestamp
/// e target são omitidos.
pub fn init_tracing(lambda_mode: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if lambda_mode {
        builder.with_target(false).without_time().init();
    } else {
        builder.init();
    }
}

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 cpf-auth-lambda server starting on port {}", port);
}

pub fn log_server_ready(host: &str, port: u16) {
    info!("✅ Server ready and listening on {}", server_url(host, port));
}

fn server_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}

pub fn log_lambda_startup() {
    info!("🚀 cpf-auth-lambda iniciando no runtime AWS Lambda");
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_user_lookup(matches: usize) {
    info!("🔍 Busca no diretório retornou {} usuário(s)", matches);
}

pub fn log_user_not_found() {
    info!("Nenhum usuário encontrado para o nome informado");
}

pub fn log_tokens_issued() {
    info!("✅ Tokens emitidos com sucesso");
}

/// Única linha de log do caminho de falha genérica (apenas a mensagem).
pub fn log_unexpected_error(message: &str) {
    error!("Erro inesperado: {}", message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

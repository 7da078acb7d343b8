use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub cognito: CognitoSettings,
}

/// Usado apenas no modo servidor local (fora do Lambda)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CognitoSettings {
    /// USER_POOL_ID: diretório de usuários do Cognito
    pub user_pool_id: String,
    /// CLIENT_ID: app client autorizado a usar ADMIN_NO_SRP_AUTH
    pub client_id: String,
    /// Região explícita; sem ela vale a cadeia padrão do SDK (AWS_REGION)
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint alternativo (ex.: emulador local do Cognito)
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Self::defaults()?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("CPF_AUTH").separator("__"));

        // Nomes de variáveis definidos no template do Lambda
        if let Ok(user_pool_id) = std::env::var("USER_POOL_ID") {
            builder = builder.set_override("cognito.user_pool_id", user_pool_id)?;
        }
        if let Ok(client_id) = std::env::var("CLIENT_ID") {
            builder = builder.set_override("cognito.client_id", client_id)?;
        }
        if let Ok(region) = std::env::var("COGNITO_REGION") {
            builder = builder.set_override("cognito.region", region)?;
        }
        if let Ok(endpoint_url) = std::env::var("COGNITO_ENDPOINT_URL") {
            builder = builder.set_override("cognito.endpoint_url", endpoint_url)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        Self::from_builder(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)
    }

    /// Constrói e valida a partir de um builder já populado
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// USER_POOL_ID e CLIENT_ID vazios são tão fatais quanto ausentes
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cognito.user_pool_id.trim().is_empty() {
            return Err(ConfigError::Message("USER_POOL_ID não configurado".to_string()));
        }
        if self.cognito.client_id.trim().is_empty() {
            return Err(ConfigError::Message("CLIENT_ID não configurado".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with(user_pool_id: Option<&str>, client_id: Option<&str>) -> ConfigBuilder<DefaultState> {
        let mut builder = Settings::defaults().unwrap();
        if let Some(id) = user_pool_id {
            builder = builder.set_override("cognito.user_pool_id", id).unwrap();
        }
        if let Some(id) = client_id {
            builder = builder.set_override("cognito.client_id", id).unwrap();
        }
        builder
    }

    #[test]
    fn test_loads_required_ids_with_server_defaults() {
        let settings = Settings::from_builder(builder_with(Some("us-east-1_abc"), Some("client-123"))).unwrap();

        assert_eq!(settings.cognito.user_pool_id, "us-east-1_abc");
        assert_eq!(settings.cognito.client_id, "client-123");
        assert_eq!(settings.cognito.region, None);
        assert_eq!(settings.cognito.endpoint_url, None);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_missing_user_pool_id_is_fatal() {
        assert!(Settings::from_builder(builder_with(None, Some("client-123"))).is_err());
    }

    #[test]
    fn test_missing_client_id_is_fatal() {
        assert!(Settings::from_builder(builder_with(Some("us-east-1_abc"), None)).is_err());
    }

    #[test]
    fn test_empty_ids_are_rejected() {
        let err = Settings::from_builder(builder_with(Some(""), Some("client-123"))).unwrap_err();
        assert!(err.to_string().contains("USER_POOL_ID"));

        let err = Settings::from_builder(builder_with(Some("us-east-1_abc"), Some("  "))).unwrap_err();
        assert!(err.to_string().contains("CLIENT_ID"));
    }

    #[test]
    fn test_optional_cognito_overrides() {
        let builder = builder_with(Some("us-east-1_abc"), Some("client-123"))
            .set_override("cognito.region", "sa-east-1")
            .unwrap()
            .set_override("cognito.endpoint_url", "http://localhost:9229")
            .unwrap()
            .set_override("server.port", "3000")
            .unwrap();

        let settings = Settings::from_builder(builder).unwrap();
        assert_eq!(settings.cognito.region.as_deref(), Some("sa-east-1"));
        assert_eq!(settings.cognito.endpoint_url.as_deref(), Some("http://localhost:9229"));
        assert_eq!(settings.server.port, 3000);
    }
}

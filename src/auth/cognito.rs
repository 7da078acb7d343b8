//! Implementação do provedor de identidade sobre o Amazon Cognito
//!
//! - `ListUsers` com filtro por atributo para localizar o cliente
//! - `AdminInitiateAuth` com `ADMIN_NO_SRP_AUTH` para emitir os tokens
//!
//! O cliente do SDK é criado uma única vez por processo e reutilizado entre
//! invocações. Retentativas do SDK ficam desligadas: cada chamada é feita
//! exatamente uma vez.

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::config::retry::RetryConfig;
use aws_sdk_cognitoidentityprovider::config::{BehaviorVersion, Region};
use aws_sdk_cognitoidentityprovider::error::DisplayErrorContext;
use aws_sdk_cognitoidentityprovider::types::AuthFlowType;
use aws_sdk_cognitoidentityprovider::Client;

use super::filter::UserFilter;
use super::provider::{DirectoryUser, IdentityProvider, ProviderError, TokenResult};
use crate::config::CognitoSettings;

pub struct CognitoIdentityProvider {
    client: Client,
    user_pool_id: String,
    client_id: String,
}

impl CognitoIdentityProvider {
    pub fn new(client: Client, user_pool_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            client,
            user_pool_id: user_pool_id.into(),
            client_id: client_id.into(),
        }
    }

    /// Carrega credenciais e região pela cadeia padrão da AWS (no Lambda,
    /// a role de execução) e aplica os overrides da configuração.
    pub async fn from_settings(settings: &CognitoSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;

        tracing::info!(
            "Cliente Cognito configurado (user pool: {}, região: {:?})",
            settings.user_pool_id,
            sdk_config.region()
        );

        Self::new(Client::new(&sdk_config), &settings.user_pool_id, &settings.client_id)
    }
}

fn request_error<E>(operation: &'static str, err: E) -> ProviderError
where
    E: std::error::Error,
{
    ProviderError::Request {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn list_users(&self, filter: &UserFilter) -> Result<Vec<DirectoryUser>, ProviderError> {
        let output = self
            .client
            .list_users()
            .user_pool_id(&self.user_pool_id)
            .filter(filter.to_expression())
            .send()
            .await
            .map_err(|e| request_error("ListUsers", e))?;

        let users = output
            .users()
            .iter()
            .map(|user| DirectoryUser {
                username: user.username().map(str::to_string),
                attributes: user
                    .attributes()
                    .iter()
                    .filter_map(|attr| attr.value().map(|v| (attr.name().to_string(), v.to_string())))
                    .collect(),
            })
            .collect();

        Ok(users)
    }

    async fn admin_initiate_auth(&self, username: &str) -> Result<TokenResult, ProviderError> {
        let output = self
            .client
            .admin_initiate_auth()
            .user_pool_id(&self.user_pool_id)
            .client_id(&self.client_id)
            .auth_flow(AuthFlowType::AdminNoSrpAuth)
            .auth_parameters("USERNAME", username)
            .send()
            .await
            .map_err(|e| request_error("AdminInitiateAuth", e))?;

        let result = match output.authentication_result() {
            Some(result) => result,
            None => {
                return Err(match output.challenge_name() {
                    Some(challenge) => ProviderError::ChallengeRequired(challenge.as_str().to_string()),
                    None => ProviderError::MissingField("AuthenticationResult"),
                });
            }
        };

        let id_token = result.id_token().ok_or(ProviderError::MissingField("IdToken"))?;
        let refresh_token = result
            .refresh_token()
            .ok_or(ProviderError::MissingField("RefreshToken"))?;

        Ok(TokenResult {
            id_token: id_token.to_string(),
            refresh_token: refresh_token.to_string(),
        })
    }
}

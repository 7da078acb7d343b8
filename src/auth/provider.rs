//! Contrato do provedor de identidade
//!
//! O handler depende apenas desta trait; o Cognito é uma implementação.
//! Nos testes ela é substituída por um dublê em memória.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use super::filter::UserFilter;

/// Usuário retornado pelo diretório.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryUser {
    /// Username interno do provedor (não é o `name` exibido ao cliente)
    pub username: Option<String>,
    pub attributes: HashMap<String, String>,
}

impl DirectoryUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Tokens emitidos para uma sessão
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResult {
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Falha na chamada ao provedor (rede, permissão, filtro rejeitado...)
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },

    /// O provedor pediu um desafio em vez de emitir tokens
    #[error("authentication challenge required: {0}")]
    ChallengeRequired(String),

    /// Resposta sem um campo esperado
    #[error("missing field in provider response: {0}")]
    MissingField(&'static str),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Lista usuários do diretório configurado que casam com o filtro.
    /// A ordem é definida pelo provedor.
    async fn list_users(&self, filter: &UserFilter) -> Result<Vec<DirectoryUser>, ProviderError>;

    /// Emite tokens para o username via fluxo administrativo, sem senha.
    async fn admin_initiate_auth(&self, username: &str) -> Result<TokenResult, ProviderError>;
}

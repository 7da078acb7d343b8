//! # Autenticação via provedor de identidade
//!
//! ## Estrutura:
//! - `provider.rs`: trait `IdentityProvider` e tipos do diretório
//! - `filter.rs`: construção do filtro de busca (com escape)
//! - `cognito.rs`: implementação sobre o Amazon Cognito

pub mod cognito;
pub mod filter;
pub mod provider;

pub use cognito::CognitoIdentityProvider;
pub use filter::UserFilter;
pub use provider::{DirectoryUser, IdentityProvider, ProviderError, TokenResult};

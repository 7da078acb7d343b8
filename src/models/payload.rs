use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use serde_json::value::RawValue;
use serde_json::Value;

use crate::auth::TokenResult;
use crate::utils::{AppError, AppResult};

pub const MSG_AUTH_SUCCESS: &str = "Autenticação bem-sucedida";

/// Corpo da requisição: `{ "name": "..." }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub name: String,
}

impl AuthRequest {
    /// Interpreta o corpo bruto vindo do gateway.
    ///
    /// Corpo vazio equivale a `{}`. JSON válido que não seja objeto é erro
    /// interno. `name` ausente ou "falso" (`null`, `false`, `0`, `""`, `[]`,
    /// `{}`) conta como ausente; qualquer outro valor vira texto sem outra
    /// validação.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let body: &[u8] = if body.is_empty() { b"{}" } else { body };

        let value: Value =
            serde_json::from_slice(body).map_err(|e| AppError::MalformedRequest(e.to_string()))?;

        if !value.is_object() {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "request body is a JSON {}, expected an object",
                json_type_name(&value)
            )));
        }

        // Segunda leitura guarda o texto original de cada campo (inteiros longos)
        let raw_fields: HashMap<String, Box<RawValue>> =
            serde_json::from_slice(body).map_err(|e| AppError::InternalError(e.into()))?;

        let name = match (value.get("name"), raw_fields.get("name")) {
            (Some(name), Some(raw)) if is_truthy(name) => name_as_text(name, raw.get()),
            _ => return Err(AppError::MissingParameter("name")),
        };

        Ok(Self { name })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Texto usado no filtro. Inteiros mantêm os dígitos exatos do corpo,
/// `true` vira `True`, listas e objetos viram JSON compacto.
fn name_as_text(value: &Value, raw: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(_) => "True".to_string(),
        Value::Number(_) if is_integer_literal(raw.trim()) => raw.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resposta de sucesso com os tokens exatamente como o provedor devolveu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccessResponse {
    pub message: String,
    pub id_token: String,
    pub refresh_token: String,
}

impl From<TokenResult> for AuthSuccessResponse {
    fn from(tokens: TokenResult) -> Self {
        Self {
            message: MSG_AUTH_SUCCESS.to_string(),
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

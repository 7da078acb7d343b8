//! Filtro de busca do ListUsers
//!
//! O Cognito aceita expressões no formato `atributo = "valor"`. O valor é
//! escapado (`\` e `"`) para que a entrada do cliente nunca saia do literal.

use std::fmt;

/// Atributo usado para localizar o cliente no diretório
pub const NAME_ATTRIBUTE: &str = "name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter {
    attribute: &'static str,
    value: String,
}

impl UserFilter {
    /// Igualdade exata sobre um atributo
    pub fn equals(attribute: &'static str, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self::equals(NAME_ATTRIBUTE, name)
    }

    pub fn attribute(&self) -> &str {
        self.attribute
    }

    /// Valor original, sem escape
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Expressão pronta para o parâmetro `Filter`
    pub fn to_expression(&self) -> String {
        format!("{} = \"{}\"", self.attribute, escape_filter_value(&self.value))
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_expression())
    }
}

fn escape_filter_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

use serde::{Deserialize, Serialize};

/// Existing client offered in the registration select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    pub cpf: String,
}

impl ClientSummary {
    /// "João Silva - 123.456.789-00"
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.cpf)
    }
}

/// Whether a registration attaches to an existing client or creates one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientMode {
    #[default]
    Existing,
    New,
}

impl ClientMode {
    pub fn code(&self) -> &'static str {
        match self {
            ClientMode::Existing => "existing",
            ClientMode::New => "new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientMode::Existing => "Cliente Existente",
            ClientMode::New => "Novo Cliente",
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code == "new" {
            ClientMode::New
        } else {
            ClientMode::Existing
        }
    }
}

/// New-client form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientDto {
    pub name: String,
    pub address: String,
    pub cpf: String,
    pub phone: String,
}

impl ClientDto {
    /// First empty required field, by its form label
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("Nome Completo", &self.name),
            ("CPF", &self.cpf),
            ("Telefone", &self.phone),
            ("Endereço", &self.address),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_mode_codes() {
        assert_eq!(ClientMode::from_code("new"), ClientMode::New);
        assert_eq!(ClientMode::from_code("existing"), ClientMode::Existing);
        assert_eq!(ClientMode::from_code(""), ClientMode::Existing);
    }

    #[test]
    fn test_first_missing_field() {
        let mut dto = ClientDto::default();
        assert_eq!(dto.first_missing_field(), Some("Nome Completo"));
        dto.name = "Ana".into();
        dto.cpf = "123.456.789-00".into();
        assert_eq!(dto.first_missing_field(), Some("Telefone"));
        dto.phone = "(11) 99999-9999".into();
        dto.address = "Rua A, 1".into();
        assert_eq!(dto.first_missing_field(), None);
    }
}

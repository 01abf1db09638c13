use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a002_client::aggregate::{ClientDto, ClientMode};
use crate::enums::VehicleStatus;

// ============================================================================
// Read models
// ============================================================================

/// Vehicle card data for the dashboards. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSummary {
    /// `AAA-9999`
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub mileage: u32,
    pub status: VehicleStatus,
    #[serde(rename = "estimatedDate")]
    pub estimated_date: Option<String>,
}

/// Entry of the vehicle selects in budget, checklist and history views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleOption {
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub owner: String,
}

impl VehicleOption {
    /// "ABC-1234 - Honda Civic 2020"
    pub fn short_label(&self) -> String {
        format!("{} - {} {}", self.plate, self.model, self.year)
    }

    /// "ABC-1234 - Honda Civic 2020 - João Silva"
    pub fn label_with_owner(&self) -> String {
        format!("{} - {}", self.short_label(), self.owner)
    }
}

/// Per-status counter card on the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusAggregate {
    pub status: VehicleStatus,
    pub count: u32,
    pub description: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Reasons a registration is refused. `Display` is the toast text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Preencha o campo obrigatório: {0}")]
    MissingField(&'static str),
    #[error("Valor numérico inválido no campo: {0}")]
    InvalidNumber(&'static str),
    #[error("Selecione um cliente existente.")]
    ClientNotSelected,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Vehicle registration form. Numbers stay as typed until submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRegistrationDto {
    pub plate: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
}

impl VehicleRegistrationDto {
    /// Required-field check done on submit.
    ///
    /// On success returns the card the new vehicle would get; it enters the
    /// shop as waiting.
    pub fn validate(
        &self,
        mode: ClientMode,
        client: &ClientDto,
    ) -> Result<VehicleSummary, RegistrationError> {
        if self.plate.trim().is_empty() {
            return Err(RegistrationError::MissingField("Placa"));
        }
        if self.model.trim().is_empty() {
            return Err(RegistrationError::MissingField("Modelo"));
        }
        if self.year.trim().is_empty() {
            return Err(RegistrationError::MissingField("Ano"));
        }
        if self.mileage.trim().is_empty() {
            return Err(RegistrationError::MissingField("Quilometragem"));
        }
        let year: i32 = self
            .year
            .trim()
            .parse()
            .map_err(|_| RegistrationError::InvalidNumber("Ano"))?;
        let mileage: u32 = self
            .mileage
            .trim()
            .parse()
            .map_err(|_| RegistrationError::InvalidNumber("Quilometragem"))?;

        match mode {
            ClientMode::Existing if self.client_id.trim().is_empty() => {
                return Err(RegistrationError::ClientNotSelected)
            }
            ClientMode::Existing => {}
            ClientMode::New => {
                if let Some(field) = client.first_missing_field() {
                    return Err(RegistrationError::MissingField(field));
                }
            }
        }

        Ok(VehicleSummary {
            plate: self.plate.clone(),
            model: self.model.trim().to_string(),
            year,
            mileage,
            status: VehicleStatus::Waiting,
            estimated_date: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> VehicleRegistrationDto {
        VehicleRegistrationDto {
            plate: "ABC-1234".into(),
            model: "Honda Civic".into(),
            year: "2020".into(),
            mileage: "45000".into(),
            client_id: "1".into(),
        }
    }

    #[test]
    fn test_valid_registration_with_existing_client() {
        let summary = filled()
            .validate(ClientMode::Existing, &ClientDto::default())
            .unwrap();
        assert_eq!(summary.plate, "ABC-1234");
        assert_eq!(summary.year, 2020);
        assert_eq!(summary.mileage, 45000);
        assert_eq!(summary.status, VehicleStatus::Waiting);
    }

    #[test]
    fn test_missing_vehicle_fields() {
        let mut dto = filled();
        dto.plate.clear();
        assert_eq!(
            dto.validate(ClientMode::Existing, &ClientDto::default()),
            Err(RegistrationError::MissingField("Placa"))
        );

        let mut dto = filled();
        dto.mileage = "muito".into();
        assert_eq!(
            dto.validate(ClientMode::Existing, &ClientDto::default()),
            Err(RegistrationError::InvalidNumber("Quilometragem"))
        );
    }

    #[test]
    fn test_client_selection_required() {
        let mut dto = filled();
        dto.client_id.clear();
        assert_eq!(
            dto.validate(ClientMode::Existing, &ClientDto::default()),
            Err(RegistrationError::ClientNotSelected)
        );
    }

    #[test]
    fn test_new_client_fields_required() {
        let dto = filled();
        let err = dto.validate(ClientMode::New, &ClientDto::default()).unwrap_err();
        assert_eq!(err, RegistrationError::MissingField("Nome Completo"));
        assert_eq!(err.to_string(), "Preencha o campo obrigatório: Nome Completo");

        let client = ClientDto {
            name: "Ana Souza".into(),
            address: "Rua das Flores, 123".into(),
            cpf: "123.456.789-00".into(),
            phone: "(11) 99999-9999".into(),
        };
        assert!(dto.validate(ClientMode::New, &client).is_ok());
    }

    #[test]
    fn test_dto_uses_camel_case() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["clientId"], "1");
    }

    #[test]
    fn test_vehicle_option_labels() {
        let option = VehicleOption {
            plate: "ABC-1234".into(),
            model: "Honda Civic".into(),
            year: 2020,
            owner: "João Silva".into(),
        };
        assert_eq!(option.short_label(), "ABC-1234 - Honda Civic 2020");
        assert_eq!(option.label_with_owner(), "ABC-1234 - Honda Civic 2020 - João Silva");
    }
}

use serde::{Deserialize, Serialize};

/// Coarse lifecycle stage of a vehicle in the shop.
///
/// Staff set it by hand: any value may follow any other, nothing is derived
/// from checklist progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Waiting,
    Progress,
    Completed,
}

impl VehicleStatus {
    /// Code used as select value and in serialized form
    pub fn code(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "waiting",
            VehicleStatus::Progress => "progress",
            VehicleStatus::Completed => "completed",
        }
    }

    /// Label shown to staff
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "Aguardando",
            VehicleStatus::Progress => "Em Procedimento",
            VehicleStatus::Completed => "Concluído",
        }
    }

    /// Label shown on the client dashboard
    pub fn client_label(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "Aguardando Início",
            VehicleStatus::Progress => "Em Procedimento",
            VehicleStatus::Completed => "Serviço Concluído",
        }
    }

    pub fn client_description(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "Seu veículo está na fila de serviços",
            VehicleStatus::Progress => "Nossos técnicos estão trabalhando no seu veículo",
            VehicleStatus::Completed => "Seu veículo está pronto para retirada",
        }
    }

    /// Badge variant understood by the `Badge` component
    pub fn badge_variant(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "warning",
            VehicleStatus::Progress => "primary",
            VehicleStatus::Completed => "success",
        }
    }

    /// Icon name for status cards
    pub fn icon_name(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "clock",
            VehicleStatus::Progress => "wrench",
            VehicleStatus::Completed => "check-circle",
        }
    }

    pub fn all() -> Vec<VehicleStatus> {
        vec![
            VehicleStatus::Waiting,
            VehicleStatus::Progress,
            VehicleStatus::Completed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "waiting" => Some(VehicleStatus::Waiting),
            "progress" => Some(VehicleStatus::Progress),
            "completed" => Some(VehicleStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in VehicleStatus::all() {
            assert_eq!(VehicleStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(VehicleStatus::from_code("unknown"), None);
    }

    #[test]
    fn test_display_attributes() {
        assert_eq!(VehicleStatus::Waiting.label(), "Aguardando");
        assert_eq!(VehicleStatus::Progress.badge_variant(), "primary");
        assert_eq!(VehicleStatus::Completed.client_label(), "Serviço Concluído");
        assert_eq!(VehicleStatus::default(), VehicleStatus::Waiting);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&VehicleStatus::Progress).unwrap();
        assert_eq!(json, "\"progress\"");
    }
}

use contracts::domain::a001_vehicle::aggregate::{RegistrationError, VehicleRegistrationDto, VehicleSummary};
use contracts::domain::a002_client::aggregate::{ClientDto, ClientMode};
use contracts::shared::format::{format_cpf, format_phone, format_plate};
use leptos::prelude::*;

/// ViewModel for the vehicle registration form
#[derive(Clone, Copy)]
pub struct VehicleRegistrationViewModel {
    pub form: RwSignal<VehicleRegistrationDto>,
    pub client: RwSignal<ClientDto>,
    pub client_mode: RwSignal<ClientMode>,
}

impl VehicleRegistrationViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(VehicleRegistrationDto::default()),
            client: RwSignal::new(ClientDto::default()),
            client_mode: RwSignal::new(ClientMode::default()),
        }
    }

    pub fn set_plate(&self, raw: String) {
        self.form.update(|f| f.plate = format_plate(&raw));
    }

    pub fn set_client_cpf(&self, raw: String) {
        self.client.update(|c| c.cpf = format_cpf(&raw));
    }

    pub fn set_client_phone(&self, raw: String) {
        self.client.update(|c| c.phone = format_phone(&raw));
    }

    pub fn is_new_client(&self) -> bool {
        self.client_mode.get() == ClientMode::New
    }

    /// Validate the form; nothing is stored anywhere
    pub fn submit_command(&self) -> Result<VehicleSummary, RegistrationError> {
        let form = self.form.get_untracked();
        let client = self.client.get_untracked();
        let mode = self.client_mode.get_untracked();
        let result = form.validate(mode, &client);
        match &result {
            Ok(vehicle) => log::info!("vehicle registered: {} ({:?} client)", vehicle.plate, mode),
            Err(e) => log::warn!("vehicle registration refused: {}", e),
        }
        result
    }
}

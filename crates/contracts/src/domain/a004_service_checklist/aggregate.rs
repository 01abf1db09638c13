use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;
use crate::enums::VehicleStatus;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceItemId(pub Uuid);

impl ServiceItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ServiceItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ServiceItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Entities
// ============================================================================

/// One line of the service checklist. Toggled, never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: ServiceItemId,
    pub name: String,
    pub completed: bool,
    pub required: bool,
}

impl ServiceItem {
    pub fn new(name: impl Into<String>, completed: bool, required: bool) -> Self {
        Self {
            id: ServiceItemId::new_v4(),
            name: name.into(),
            completed,
            required,
        }
    }
}

/// `100 * part / whole`, zero when `whole` is zero
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceChecklist {
    pub services: Vec<ServiceItem>,
    /// Set by staff; not derived from the completion ratios
    pub status: VehicleStatus,
}

impl ServiceChecklist {
    pub fn new(services: Vec<ServiceItem>) -> Self {
        Self {
            services,
            status: VehicleStatus::default(),
        }
    }

    /// Flip `completed` on the matching item. Returns `false` when absent.
    pub fn toggle_service(&mut self, id: ServiceItemId) -> bool {
        match self.services.iter_mut().find(|s| s.id == id) {
            Some(service) => {
                service.completed = !service.completed;
                true
            }
            None => false,
        }
    }

    pub fn set_status(&mut self, status: VehicleStatus) {
        self.status = status;
    }

    pub fn total_count(&self) -> usize {
        self.services.len()
    }

    pub fn completed_count(&self) -> usize {
        self.services.iter().filter(|s| s.completed).count()
    }

    pub fn required_count(&self) -> usize {
        self.services.iter().filter(|s| s.required).count()
    }

    pub fn completed_required_count(&self) -> usize {
        self.services
            .iter()
            .filter(|s| s.required && s.completed)
            .count()
    }

    pub fn overall_percentage(&self) -> f64 {
        percentage(self.completed_count(), self.total_count())
    }

    pub fn required_percentage(&self) -> f64 {
        percentage(self.completed_required_count(), self.required_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServiceChecklist {
        ServiceChecklist::new(vec![
            ServiceItem::new("Troca de óleo", true, true),
            ServiceItem::new("Filtro de ar", true, true),
            ServiceItem::new("Freios", false, true),
            ServiceItem::new("Pneus", false, true),
            ServiceItem::new("Alinhamento", false, false),
        ])
    }

    #[test]
    fn test_service_id_string_round_trip() {
        let item = ServiceItem::new("Freios", false, true);
        let text = item.id.as_string();
        assert_eq!(ServiceItemId::from_string(&text), Ok(item.id));
        assert!(ServiceItemId::from_string("").is_err());
    }

    #[test]
    fn test_percentages() {
        let checklist = sample();
        assert_eq!(checklist.completed_count(), 2);
        assert_eq!(checklist.required_count(), 4);
        assert_eq!(checklist.overall_percentage(), 40.0);
        assert_eq!(checklist.required_percentage(), 50.0);
    }

    #[test]
    fn test_empty_checklist_is_zero_percent() {
        let checklist = ServiceChecklist::default();
        assert_eq!(checklist.overall_percentage(), 0.0);
        assert_eq!(checklist.required_percentage(), 0.0);
    }

    #[test]
    fn test_no_required_items_is_zero_percent() {
        let checklist = ServiceChecklist::new(vec![
            ServiceItem::new("Lavagem", true, false),
            ServiceItem::new("Polimento", false, false),
        ]);
        assert_eq!(checklist.required_percentage(), 0.0);
        assert!(!checklist.required_percentage().is_nan());
        assert_eq!(checklist.overall_percentage(), 50.0);
    }

    #[test]
    fn test_toggle_service() {
        let mut checklist = sample();
        let id = checklist.services[2].id;
        assert!(checklist.toggle_service(id));
        assert!(checklist.services[2].completed);
        assert_eq!(checklist.required_percentage(), 75.0);
        assert!(checklist.toggle_service(id));
        assert!(!checklist.services[2].completed);
        assert!(!checklist.toggle_service(ServiceItemId::new_v4()));
        assert_eq!(checklist.total_count(), 5);
    }

    #[test]
    fn test_status_is_independent_of_progress() {
        let mut checklist = sample();
        checklist.set_status(VehicleStatus::Completed);
        assert_eq!(checklist.status, VehicleStatus::Completed);
        assert!(checklist.overall_percentage() < 100.0);

        checklist.set_status(VehicleStatus::Waiting);
        for id in checklist.services.iter().map(|s| s.id).collect::<Vec<_>>() {
            if !checklist.services.iter().any(|s| s.id == id && s.completed) {
                checklist.toggle_service(id);
            }
        }
        assert_eq!(checklist.overall_percentage(), 100.0);
        assert_eq!(checklist.status, VehicleStatus::Waiting);
    }
}

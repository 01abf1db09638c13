use super::model;
use contracts::domain::a004_service_checklist::aggregate::{ServiceChecklist, ServiceItemId};
use contracts::enums::VehicleStatus;
use leptos::prelude::*;

/// Progress numbers shown in the three summary cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    pub overall: f64,
    pub completed_required: usize,
    pub required: usize,
    pub required_pct: f64,
}

impl ChecklistProgress {
    fn of(checklist: &ServiceChecklist) -> Self {
        Self {
            completed: checklist.completed_count(),
            total: checklist.total_count(),
            overall: checklist.overall_percentage(),
            completed_required: checklist.completed_required_count(),
            required: checklist.required_count(),
            required_pct: checklist.required_percentage(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ServiceChecklistViewModel {
    pub checklist: RwSignal<ServiceChecklist>,
    pub selected_vehicle: RwSignal<String>,
    pub observations: RwSignal<String>,
}

impl ServiceChecklistViewModel {
    pub fn new() -> Self {
        Self {
            checklist: RwSignal::new(model::fetch_checklist()),
            selected_vehicle: RwSignal::new(String::new()),
            observations: RwSignal::new(String::new()),
        }
    }

    pub fn progress(&self) -> ChecklistProgress {
        self.checklist.with(ChecklistProgress::of)
    }

    pub fn status(&self) -> VehicleStatus {
        self.checklist.with(|c| c.status)
    }

    pub fn set_status_code(&self, code: &str) {
        if let Some(status) = VehicleStatus::from_code(code) {
            self.checklist.update(|c| c.set_status(status));
        }
    }

    pub fn toggle(&self, id: ServiceItemId) {
        self.checklist.update(|c| {
            c.toggle_service(id);
        });
    }

    pub fn is_completed(&self, id: ServiceItemId) -> bool {
        self.checklist
            .with(|c| c.services.iter().any(|s| s.id == id && s.completed))
    }

    /// Nothing is persisted; the save is logged and acknowledged
    pub fn save_command(&self) {
        let progress = self.checklist.with_untracked(ChecklistProgress::of);
        log::info!(
            "checklist saved for '{}': {}/{} done, status {}",
            self.selected_vehicle.get_untracked(),
            progress.completed,
            progress.total,
            self.checklist.with_untracked(|c| c.status)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_of_seed_checklist() {
        let progress = ChecklistProgress::of(&model::fetch_checklist());
        assert_eq!((progress.completed, progress.total), (2, 6));
        assert_eq!((progress.completed_required, progress.required), (2, 4));
        assert_eq!(progress.required_pct, 50.0);
        assert!((progress.overall - 100.0 / 3.0).abs() < 1e-9);
    }
}

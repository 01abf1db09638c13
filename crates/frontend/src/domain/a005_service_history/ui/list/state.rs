use contracts::domain::a005_service_history::aggregate::{
    filter_history, HistoryEntry, HistoryFilter, HistorySummary,
};
use contracts::seed;
use leptos::prelude::*;

#[derive(Debug, Clone)]
pub struct VehicleHistoryState {
    pub entries: Vec<HistoryEntry>,
    pub filter: HistoryFilter,
    pub selected_vehicle: String,
}

impl Default for VehicleHistoryState {
    fn default() -> Self {
        Self {
            entries: seed::history(),
            filter: HistoryFilter::default(),
            selected_vehicle: String::new(),
        }
    }
}

impl VehicleHistoryState {
    pub fn visible(&self) -> Vec<HistoryEntry> {
        filter_history(&self.entries, &self.filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Summary cards ignore the filter
    pub fn summary(&self) -> HistorySummary {
        HistorySummary::from_entries(&self.entries)
    }

    /// Hint shown when nothing matches
    pub fn empty_hint(&self) -> &'static str {
        if self.filter.is_active() {
            "Tente ajustar os filtros de busca"
        } else {
            "Selecione um veículo para ver seu histórico"
        }
    }
}

pub fn create_state() -> RwSignal<VehicleHistoryState> {
    RwSignal::new(VehicleHistoryState::default())
}

pub fn vehicle_options() -> Vec<(String, String)> {
    seed::vehicle_options()
        .into_iter()
        .map(|v| (v.plate.clone(), v.short_label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_service_history::aggregate::StatusFilter;

    #[test]
    fn test_default_state_shows_everything() {
        let state = VehicleHistoryState::default();
        assert_eq!(state.visible().len(), state.entries.len());
        assert_eq!(state.empty_hint(), "Selecione um veículo para ver seu histórico");
    }

    #[test]
    fn test_summary_ignores_filter() {
        let mut state = VehicleHistoryState::default();
        let before = state.summary();
        state.filter.search = "xyz".into();
        state.filter.status = StatusFilter::Cancelled;
        assert!(state.visible().is_empty());
        assert_eq!(state.summary(), before);
        assert_eq!(state.empty_hint(), "Tente ajustar os filtros de busca");
    }
}

use super::model;
use contracts::domain::a003_budget::aggregate::{
    Budget, BudgetError, BudgetHeaderDto, BudgetItemId, BudgetItemUpdate, BudgetTotals,
    NewBudgetItemDto,
};
use contracts::shared::format::{format_date_br, parse_iso_date};
use leptos::prelude::*;

/// ViewModel for the budget builder
#[derive(Clone, Copy)]
pub struct BudgetCreationViewModel {
    pub budget: RwSignal<Budget>,
    pub header: RwSignal<BudgetHeaderDto>,
    pub new_item: RwSignal<NewBudgetItemDto>,
}

impl BudgetCreationViewModel {
    pub fn new() -> Self {
        Self {
            budget: RwSignal::new(model::fetch_initial_budget()),
            header: RwSignal::new(BudgetHeaderDto::default()),
            new_item: RwSignal::new(NewBudgetItemDto::default()),
        }
    }

    pub fn totals(&self) -> BudgetTotals {
        self.budget.with(|b| b.totals())
    }

    pub fn can_add_item(&self) -> bool {
        self.new_item.with(|dto| dto.is_filled())
    }

    /// "dd/mm/yyyy" of the chosen delivery date, if any
    pub fn estimated_date_label(&self) -> Option<String> {
        self.header
            .with(|h| parse_iso_date(&h.estimated_date))
            .map(format_date_br)
    }

    /// Append the new-item form to the list and reset the form.
    /// A rejected item is only logged; the list and the form stay as they were.
    pub fn add_item_command(&self) -> Result<(), BudgetError> {
        let dto = self.new_item.get_untracked();
        let mut result = Ok(());
        self.budget.update(|b| {
            result = b
                .add_item(&dto.description, &dto.price, dto.required)
                .map(|id| log::debug!("budget item added: {:?}", id));
        });
        match &result {
            Ok(()) => self.new_item.set(NewBudgetItemDto::default()),
            Err(e) => log::debug!("budget item rejected: {}", e),
        }
        result
    }

    pub fn remove_item(&self, id: BudgetItemId) {
        self.budget.update(|b| {
            b.remove_item(id);
        });
    }

    pub fn update_item(&self, id: BudgetItemId, update: BudgetItemUpdate) {
        self.budget.update(|b| {
            b.update_item(id, update);
        });
    }

    pub fn item_description(&self, id: BudgetItemId) -> String {
        self.budget.with(|b| {
            b.items
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.description.clone())
                .unwrap_or_default()
        })
    }

    /// Check the budget can be handed to the client; nothing is sent anywhere
    pub fn generate_command(&self) -> Result<BudgetTotals, BudgetError> {
        let header = self.header.get_untracked();
        let budget = self.budget.get_untracked();
        budget.validate_for_generation(&header.selected_vehicle)?;
        let totals = budget.totals();
        log::info!(
            "budget generated for {}: {} items, total {}",
            header.selected_vehicle,
            budget.items.len(),
            totals.grand
        );
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(vm: &BudgetCreationViewModel, description: &str, price: &str) {
        vm.new_item.update(|dto| {
            dto.description = description.to_string();
            dto.price = price.to_string();
        });
    }

    #[test]
    fn test_add_item_resets_form() {
        let vm = BudgetCreationViewModel::new();
        let before = vm.budget.with_untracked(|b| b.items.len());
        fill(&vm, "Alinhamento", "80.00");

        assert!(vm.add_item_command().is_ok());
        assert_eq!(vm.budget.with_untracked(|b| b.items.len()), before + 1);
        assert_eq!(vm.new_item.get_untracked(), NewBudgetItemDto::default());
    }

    #[test]
    fn test_rejected_item_leaves_list_and_form_untouched() {
        let vm = BudgetCreationViewModel::new();
        let before = vm.budget.get_untracked();
        fill(&vm, "Óleo", "-5");
        assert!(vm.can_add_item());

        assert_eq!(
            vm.add_item_command(),
            Err(BudgetError::InvalidPrice("-5".to_string()))
        );
        assert_eq!(vm.budget.get_untracked(), before);
        let form = vm.new_item.get_untracked();
        assert_eq!((form.description.as_str(), form.price.as_str()), ("Óleo", "-5"));
    }
}

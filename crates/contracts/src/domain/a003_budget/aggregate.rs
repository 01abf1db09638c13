use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Budget line item identifier, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetItemId(pub Uuid);

impl BudgetItemId {
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

impl AggregateId for BudgetItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BudgetItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Reasons a budget operation is refused. `Display` is the toast text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("Informe a descrição do item.")]
    EmptyDescription,
    #[error("Valor inválido: {0}")]
    InvalidPrice(String),
    #[error("Selecione um veículo para gerar o orçamento.")]
    VehicleNotSelected,
}

/// Parse a user-typed price. Accepts `,` as decimal separator.
///
/// Returns `None` for empty, non-numeric or negative input.
pub fn parse_price(text: &str) -> Option<Decimal> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized)
        .ok()
        .filter(|price| !price.is_sign_negative())
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: BudgetItemId,
    pub description: String,
    pub price: Decimal,
    pub required: bool,
}

impl BudgetItem {
    pub fn new(description: impl Into<String>, price: Decimal, required: bool) -> Self {
        Self {
            id: BudgetItemId::new_v4(),
            description: description.into(),
            price,
            required,
        }
    }
}

/// Single-field edit applied to an existing item
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetItemUpdate {
    Description(String),
    Price(Decimal),
    /// Raw text from the price input; unparseable text becomes zero
    PriceText(String),
    Required(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub required: Decimal,
    pub optional: Decimal,
    pub grand: Decimal,
}

/// Ordered list of line items (insertion order)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub items: Vec<BudgetItem>,
}

impl Budget {
    pub fn new(items: Vec<BudgetItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item. The list is untouched on error.
    pub fn add_item(
        &mut self,
        description: &str,
        price_text: &str,
        required: bool,
    ) -> Result<BudgetItemId, BudgetError> {
        if description.trim().is_empty() {
            return Err(BudgetError::EmptyDescription);
        }
        let price =
            parse_price(price_text).ok_or_else(|| BudgetError::InvalidPrice(price_text.to_string()))?;

        let item = BudgetItem::new(description, price, required);
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    /// Returns `false` when no item has this id
    pub fn remove_item(&mut self, id: BudgetItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Returns `false` when no item has this id
    pub fn update_item(&mut self, id: BudgetItemId, update: BudgetItemUpdate) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match update {
            BudgetItemUpdate::Description(description) => item.description = description,
            BudgetItemUpdate::Price(price) => item.price = price.max(Decimal::ZERO),
            BudgetItemUpdate::PriceText(text) => {
                item.price = parse_price(&text).unwrap_or(Decimal::ZERO)
            }
            BudgetItemUpdate::Required(required) => item.required = required,
        }
        true
    }

    pub fn totals(&self) -> BudgetTotals {
        let (required, optional) = self.items.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(required, optional), item| {
                if item.required {
                    (required + item.price, optional)
                } else {
                    (required, optional + item.price)
                }
            },
        );
        BudgetTotals {
            required,
            optional,
            grand: required + optional,
        }
    }

    /// Items with the given flag, in list order
    pub fn partition(&self, required: bool) -> impl Iterator<Item = &BudgetItem> {
        self.items.iter().filter(move |item| item.required == required)
    }

    /// Check run before the budget is handed to the client
    pub fn validate_for_generation(&self, selected_vehicle: &str) -> Result<(), BudgetError> {
        if selected_vehicle.trim().is_empty() {
            return Err(BudgetError::VehicleNotSelected);
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// State of the "add item" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudgetItemDto {
    pub description: String,
    pub price: String,
    pub required: bool,
}

impl Default for NewBudgetItemDto {
    fn default() -> Self {
        Self {
            description: String::new(),
            price: String::new(),
            required: true,
        }
    }
}

impl NewBudgetItemDto {
    /// Mirrors the add button's enabled state
    pub fn is_filled(&self) -> bool {
        !self.description.is_empty() && !self.price.is_empty()
    }
}

/// Budget header fields edited next to the item list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetHeaderDto {
    #[serde(rename = "selectedVehicle")]
    pub selected_vehicle: String,
    /// `YYYY-MM-DD` from a date input, empty when unset
    #[serde(rename = "estimatedDate")]
    pub estimated_date: String,
    pub observations: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64, required: bool) -> BudgetItem {
        BudgetItem::new("item", Decimal::from(price), required)
    }

    #[test]
    fn test_totals_split_required_and_optional() {
        let budget = Budget::new(vec![item(80, true), item(45, true), item(80, false)]);
        let totals = budget.totals();
        assert_eq!(totals.required, Decimal::from(125));
        assert_eq!(totals.optional, Decimal::from(80));
        assert_eq!(totals.grand, Decimal::from(205));
    }

    #[test]
    fn test_item_id_string_round_trip() {
        let id = BudgetItemId::new_v4();
        assert_eq!(BudgetItemId::from_string(&id.as_string()), Ok(id));
        assert!(BudgetItemId::from_string("item-1").is_err());
    }

    #[test]
    fn test_empty_budget_totals_are_zero() {
        assert_eq!(Budget::default().totals(), BudgetTotals::default());
    }

    #[test]
    fn test_add_item() {
        let mut budget = Budget::default();
        let id = budget.add_item("Pastilha de freio", "120,50", false).unwrap();
        assert_eq!(budget.items.len(), 1);
        assert_eq!(budget.items[0].id, id);
        assert_eq!(budget.items[0].price, Decimal::new(12050, 2));
        assert!(!budget.items[0].required);
    }

    #[test]
    fn test_add_item_rejects_bad_input() {
        let mut budget = Budget::default();
        assert_eq!(
            budget.add_item("", "10", true),
            Err(BudgetError::EmptyDescription)
        );
        assert_eq!(
            budget.add_item("Óleo", "abc", true),
            Err(BudgetError::InvalidPrice("abc".into()))
        );
        assert!(budget.add_item("Óleo", "-5", true).is_err());
        assert!(budget.add_item("Óleo", "", true).is_err());
        assert!(budget.is_empty());
    }

    #[test]
    fn test_add_item_assigns_unique_ids() {
        let mut budget = Budget::default();
        let a = budget.add_item("A", "1", true).unwrap();
        let b = budget.add_item("A", "1", true).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_item() {
        let mut budget = Budget::new(vec![item(10, true), item(20, false)]);
        let id = budget.items[0].id;
        assert!(budget.remove_item(id));
        assert_eq!(budget.items.len(), 1);
        assert!(!budget.remove_item(id));
        assert_eq!(budget.items.len(), 1);
    }

    #[test]
    fn test_update_item() {
        let mut budget = Budget::new(vec![item(10, true)]);
        let id = budget.items[0].id;

        assert!(budget.update_item(id, BudgetItemUpdate::Description("Filtro".into())));
        assert!(budget.update_item(id, BudgetItemUpdate::Required(false)));
        assert!(budget.update_item(id, BudgetItemUpdate::PriceText("33.3".into())));
        assert_eq!(budget.items[0].description, "Filtro");
        assert!(!budget.items[0].required);
        assert_eq!(budget.items[0].price, Decimal::new(333, 1));

        assert!(budget.update_item(id, BudgetItemUpdate::PriceText("oops".into())));
        assert_eq!(budget.items[0].price, Decimal::ZERO);

        assert!(!budget.update_item(BudgetItemId::new_v4(), BudgetItemUpdate::Required(true)));
    }

    #[test]
    fn test_partition_covers_the_list() {
        let budget = Budget::new(vec![item(1, true), item(2, false), item(3, true)]);
        let required = budget.partition(true).count();
        let optional = budget.partition(false).count();
        assert_eq!(required + optional, budget.items.len());
        assert_eq!(required, 2);
    }

    #[test]
    fn test_generation_requires_vehicle() {
        let budget = Budget::default();
        assert_eq!(
            budget.validate_for_generation(""),
            Err(BudgetError::VehicleNotSelected)
        );
        assert!(budget.validate_for_generation("ABC-1234").is_ok());
    }

    #[test]
    fn test_new_item_form_filled() {
        let mut dto = NewBudgetItemDto::default();
        assert!(dto.required);
        assert!(!dto.is_filled());
        dto.description = "Óleo".into();
        dto.price = "80".into();
        assert!(dto.is_filled());
    }
}

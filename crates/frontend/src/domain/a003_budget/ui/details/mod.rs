//! Budget Creation UI Module
//!
//! - model.rs: sample data (vehicles, starting items)
//! - view_model.rs: budget state, item commands, totals
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::BudgetCreation;
pub use view_model::BudgetCreationViewModel;

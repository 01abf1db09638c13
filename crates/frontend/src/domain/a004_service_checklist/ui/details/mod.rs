//! Service Checklist UI Module
//!
//! - model.rs: sample data (vehicles, services)
//! - view_model.rs: checklist state, toggle and save commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::ServiceChecklist;
pub use view_model::ServiceChecklistViewModel;

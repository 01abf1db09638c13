//! Vehicle Registration UI Module
//!
//! MVVM split:
//! - model.rs: sample data source (existing clients)
//! - view_model.rs: form state and the submit command
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::VehicleRegistration;
pub use view_model::VehicleRegistrationViewModel;

pub mod a001_vehicle;
pub mod a003_budget;
pub mod a004_service_checklist;
pub mod a005_service_history;

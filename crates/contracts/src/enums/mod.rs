pub mod history_status;
pub mod vehicle_status;

pub use history_status::HistoryStatus;
pub use vehicle_status::VehicleStatus;

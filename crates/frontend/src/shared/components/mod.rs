pub mod card_animated;
pub mod page_header;
pub mod status_card;
pub mod summary_row;
pub mod ui;
pub mod vehicle_card;

pub use card_animated::CardAnimated;
pub use page_header::PageHeader;
pub use status_card::StatusCard;
pub use summary_row::SummaryRow;
pub use vehicle_card::VehicleCard;

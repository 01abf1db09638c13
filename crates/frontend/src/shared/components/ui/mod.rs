pub mod badge;
pub mod button;
pub mod checkbox;
pub mod field;
pub mod input;
pub mod progress;
pub mod select;
pub mod textarea;

pub use badge::{Badge, RequirementBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use field::FormField;
pub use input::Input;
pub use progress::ProgressBar;
pub use select::Select;
pub use textarea::Textarea;

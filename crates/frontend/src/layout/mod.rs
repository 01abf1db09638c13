pub mod global_context;
pub mod toast_service;

pub use global_context::{use_navigation, AppGlobalContext, Page};
pub use toast_service::{use_toast, ToastHost, ToastService};

use crate::layout::global_context::AppGlobalContext;
use crate::layout::ToastService;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(None).unwrap_or_else(|e| {
        log::error!("Failed to load configuration: {:#}", e);
        AppConfig::default()
    });

    // Navigation state shared by the shell and every view
    provide_context(AppGlobalContext::new());

    // Toasts are dismissed after the configured timeout
    provide_context(ToastService::new(config.ui.toast_timeout_ms));

    provide_context(config);

    view! {
        <AppRoutes />
    }
}

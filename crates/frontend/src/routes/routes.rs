use crate::dashboards::{AdminDashboard, ClientDashboard};
use crate::domain::a001_vehicle::ui::details::VehicleRegistration;
use crate::domain::a003_budget::ui::details::BudgetCreation;
use crate::domain::a004_service_checklist::ui::details::ServiceChecklist;
use crate::domain::a005_service_history::ui::list::VehicleHistory;
use crate::layout::{use_navigation, Page, ToastHost};
use crate::system::pages::client_login::ClientLoginPage;
use crate::system::pages::landing::LandingPage;
use leptos::prelude::*;

/// Renders the view behind a page.
///
/// Each call mounts a fresh view, so view state is dropped on navigation.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Landing => view! { <LandingPage /> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboard /> }.into_any(),
        Page::ClientLogin => view! { <ClientLoginPage /> }.into_any(),
        Page::ClientDashboard => view! { <ClientDashboard /> }.into_any(),
        Page::VehicleRegistration => view! { <VehicleRegistration /> }.into_any(),
        Page::BudgetCreation => view! { <BudgetCreation /> }.into_any(),
        Page::ServiceChecklist => view! { <ServiceChecklist /> }.into_any(),
        Page::VehicleHistory => view! { <VehicleHistory /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_navigation();

    // Initialize router integration. This runs once when the component is created.
    nav.init_router_integration();

    view! {
        <div class="app-layout">
            {move || render_page(nav.current.get())}
            <ToastHost />
        </div>
    }
}

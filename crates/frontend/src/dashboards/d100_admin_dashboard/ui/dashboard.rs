use crate::layout::{use_navigation, Page};
use crate::shared::components::ui::Button;
use crate::shared::components::{CardAnimated, PageHeader, StatusCard, VehicleCard};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::use_app_config;
use contracts::seed;
use leptos::prelude::*;

/// Quick action tiles: (icon, label, target)
const QUICK_ACTIONS: &[(&str, &str, Page)] = &[
    ("plus", "Cadastrar Veículo", Page::VehicleRegistration),
    ("file-text", "Criar Orçamento", Page::BudgetCreation),
    ("check-square", "Checklist de Serviços", Page::ServiceChecklist),
    ("bar-chart", "Histórico", Page::VehicleHistory),
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let nav = use_navigation();
    let config = use_app_config();

    let status_cards = seed::status_aggregates()
        .into_iter()
        .map(|aggregate| view! { <StatusCard aggregate=aggregate /> })
        .collect_view();

    let vehicle_cards = seed::vehicles_in_progress()
        .into_iter()
        .map(|vehicle| view! { <VehicleCard vehicle=vehicle /> })
        .collect_view();

    let quick_actions = QUICK_ACTIONS
        .iter()
        .map(|&(icon_name, label, page)| {
            view! {
                <button class="quick-action" on:click=move |_| nav.navigate(page)>
                    <span class="quick-action__icon">{icon(icon_name)}</span>
                    <span class="quick-action__label">{label}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <PageFrame page=Page::AdminDashboard>
            <PageHeader title=config.shop.name subtitle=config.shop.tagline>
                <Button
                    variant="accent"
                    on_click=Callback::new(move |_| nav.navigate(Page::VehicleRegistration))
                >
                    {icon("plus")}
                    " Novo Veículo"
                </Button>
                <Button
                    variant="ghost"
                    on_click=Callback::new(move |_| nav.navigate(Page::Landing))
                >
                    {icon("log-out")}
                </Button>
            </PageHeader>

            <div class="page__content">
                <section class="status-grid">{status_cards}</section>

                <CardAnimated
                    title="Veículos em Atendimento"
                    description="Acompanhe o status dos veículos na oficina"
                    icon_name="car"
                    delay_ms=60
                >
                    <div class="vehicle-grid">{vehicle_cards}</div>
                </CardAnimated>

                <CardAnimated title="Ações Rápidas" icon_name="wrench" delay_ms=120>
                    <div class="quick-actions">{quick_actions}</div>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}

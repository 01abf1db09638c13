pub mod state;

use self::state::{create_state, vehicle_options};
use crate::layout::Page;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::use_app_config;
use contracts::domain::a005_service_history::aggregate::{
    records_found_label, services_performed_label, HistoryEntry, StatusFilter,
};
use contracts::enums::HistoryStatus;
use contracts::shared::format::{format_date_br, format_date_long_br, format_money};
use leptos::prelude::*;

#[component]
pub fn VehicleHistory() -> impl IntoView {
    let state = create_state();
    let currency = use_app_config().shop.currency_symbol;

    let status_options: Vec<(String, String)> = StatusFilter::all()
        .into_iter()
        .map(|f| (f.code().to_string(), f.label().to_string()))
        .collect();

    let summary = Memo::new(move |_| state.with(|s| s.summary()));
    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let search = Signal::derive(move || state.with(|s| s.filter.search.clone()));

    let total_spent = {
        let currency = currency.clone();
        move || format_money(summary.get().total_spent, &currency)
    };

    let entry_view = move |entry: HistoryEntry| {
        let is_completed = entry.status == HistoryStatus::Completed;
        let total = format_money(entry.total, &currency);
        let services_label = services_performed_label(entry.services.len());
        view! {
            <div class="timeline-item">
                <div class="timeline-item__marker">{icon("wrench")}</div>
                <div class="timeline-item__card">
                    <div class="timeline-item__header">
                        <div>
                            <h3 class="timeline-item__date">
                                {icon("calendar")}
                                " "
                                {format_date_long_br(entry.date)}
                            </h3>
                            <p class="timeline-item__count">{services_label}</p>
                        </div>
                        <div class="timeline-item__status">
                            <Badge variant=entry.status.badge_variant()>{entry.status.label()}</Badge>
                            {is_completed.then(|| view! {
                                <div class="timeline-item__total">{total}</div>
                            })}
                        </div>
                    </div>
                    <div class="timeline-item__services">
                        {entry
                            .services
                            .into_iter()
                            .map(|service| view! {
                                <span class="chip">
                                    {move || highlight_matches(&service, &search.get())}
                                </span>
                            })
                            .collect_view()}
                    </div>
                    {entry.observations.map(|obs| view! {
                        <div class="timeline-item__observations">
                            <strong>"Observações: "</strong>
                            {obs}
                        </div>
                    })}
                </div>
            </div>
        }
    };

    view! {
        <PageFrame page=Page::VehicleHistory>
            <PageHeader
                title="Histórico do Veículo"
                subtitle="Consultar histórico completo de serviços"
                back_to=Page::AdminDashboard
            >
                <></>
            </PageHeader>

            <div class="page__content">
                <CardAnimated title="Filtros" icon_name="search" class="form-grid form-grid--3">
                    <Select
                        id="history-vehicle"
                        label="Veículo"
                        placeholder="Selecione o veículo"
                        value=Signal::derive(move || state.with(|s| s.selected_vehicle.clone()))
                        options=vehicle_options()
                        on_change=Callback::new(move |v: String| state.update(|s| s.selected_vehicle = v))
                    />
                    <Input
                        id="history-search"
                        label="Buscar Serviço"
                        placeholder="Digite o nome do serviço..."
                        value=search
                        on_input=Callback::new(move |v: String| state.update(|s| s.filter.search = v))
                    />
                    <Select
                        id="history-status"
                        label="Status"
                        value=Signal::derive(move || state.with(|s| s.filter.status.code().to_string()))
                        options=status_options
                        on_change=Callback::new(move |v: String| {
                            if let Some(status) = StatusFilter::from_code(&v) {
                                state.update(|s| s.filter.status = status);
                            }
                        })
                    />
                </CardAnimated>

                <div class="summary-grid">
                    <CardAnimated delay_ms=40>
                        <div class="summary-card">
                            <span class="summary-card__icon summary-card__icon--success">{icon("check-circle")}</span>
                            <div>
                                <p class="summary-card__label">"Serviços Concluídos"</p>
                                <p class="summary-card__value">{move || summary.get().completed_count}</p>
                            </div>
                        </div>
                    </CardAnimated>
                    <CardAnimated delay_ms=80>
                        <div class="summary-card">
                            <span class="summary-card__icon summary-card__icon--accent">{icon("file-text")}</span>
                            <div>
                                <p class="summary-card__label">"Total Gasto"</p>
                                <p class="summary-card__value">{total_spent}</p>
                            </div>
                        </div>
                    </CardAnimated>
                    <CardAnimated delay_ms=120>
                        <div class="summary-card">
                            <span class="summary-card__icon summary-card__icon--primary">{icon("clock")}</span>
                            <div>
                                <p class="summary-card__label">"Último Serviço"</p>
                                <p class="summary-card__value">
                                    {move || summary
                                        .get()
                                        .last_service_date
                                        .map(format_date_br)
                                        .unwrap_or_else(|| "-".to_string())}
                                </p>
                            </div>
                        </div>
                    </CardAnimated>
                </div>

                <CardAnimated
                    title="Histórico de Serviços"
                    description=Signal::derive(move || Some(records_found_label(visible.get().len())))
                    icon_name="history"
                    delay_ms=160
                >
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=move || view! {
                            <div class="empty-state">
                                {icon("history")}
                                <h3>"Nenhum registro encontrado"</h3>
                                <p>{move || state.with(|s| s.empty_hint())}</p>
                            </div>
                        }
                    >
                        <div class="timeline">
                            <For
                                each=move || visible.get()
                                key=|entry| entry.id.clone()
                                children=entry_view.clone()
                            />
                        </div>
                    </Show>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}

use crate::layout::{use_navigation, Page};
use crate::shared::components::ui::{Badge, Button, ProgressBar, RequirementBadge};
use crate::shared::components::{CardAnimated, PageHeader, SummaryRow};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::use_app_config;
use contracts::seed;
use contracts::shared::format::{format_mileage, format_money};
use leptos::prelude::*;

/// Read-only view of the client's vehicle, its services and its budget
#[component]
pub fn ClientDashboard() -> impl IntoView {
    let nav = use_navigation();
    let config = use_app_config();
    let currency = config.shop.currency_symbol;

    let vehicle = seed::client_vehicle();
    let services = seed::client_services();
    let budget = seed::client_budget();
    let last_update = seed::client_last_update();

    let status = services.status;
    let progress = services.overall_percentage();
    let progress_label = format!(
        "{}/{} serviços concluídos",
        services.completed_count(),
        services.total_count()
    );
    let budget_total = format_money(budget.totals().grand, &currency);

    let service_rows = services
        .services
        .into_iter()
        .map(|service| {
            let (icon_name, row_class) = if service.completed {
                ("check-circle", "client-service client-service--done")
            } else {
                ("clock", "client-service")
            };
            view! {
                <div class=row_class>
                    <span class="client-service__icon">{icon(icon_name)}</span>
                    <span class="client-service__name">{service.name}</span>
                    <RequirementBadge required=service.required />
                </div>
            }
        })
        .collect_view();

    let budget_rows = budget
        .items
        .into_iter()
        .map(|item| {
            view! {
                <div class="client-budget-item">
                    <div>
                        <p class="client-budget-item__description">{item.description}</p>
                        <RequirementBadge required=item.required />
                    </div>
                    <span class="client-budget-item__price">{format_money(item.price, &currency)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page=Page::ClientDashboard>
            <PageHeader title=config.shop.name subtitle="Área do Cliente">
                <Button
                    variant="outline"
                    on_click=Callback::new(move |_| nav.navigate(Page::Landing))
                >
                    {icon("log-out")}
                    " Sair"
                </Button>
            </PageHeader>

            <div class="page__content">
                <CardAnimated
                    title=format!("{} - {}", vehicle.plate, vehicle.model)
                    description=format!("{} • {}", vehicle.year, format_mileage(vehicle.mileage))
                    icon_name="car"
                    class=format!("client-status client-status--{}", status.code())
                >
                    <div class="client-status__header">
                        <span class="client-status__icon">{icon(status.icon_name())}</span>
                        <div>
                            <h2 class="client-status__label">{status.client_label()}</h2>
                            <p class="client-status__description">{status.client_description()}</p>
                        </div>
                        <Badge variant=status.badge_variant()>{status.label()}</Badge>
                    </div>
                    <ProgressBar value=progress />
                    <p class="client-status__progress">{progress_label}</p>
                    <div class="client-status__meta">
                        {vehicle.estimated_date.map(|date| view! {
                            <span>{icon("calendar")} " Previsão de entrega: " {date}</span>
                        })}
                        <span>{icon("clock")} " Última atualização: " {last_update}</span>
                    </div>
                </CardAnimated>

                <div class="client-grid">
                    <CardAnimated title="Serviços" icon_name="wrench" delay_ms=60>
                        <div class="client-services">{service_rows}</div>
                    </CardAnimated>

                    <CardAnimated title="Orçamento" icon_name="file-text" delay_ms=120>
                        <div class="client-budget">{budget_rows}</div>
                        <SummaryRow label="Total:" value=budget_total strong=true />
                    </CardAnimated>
                </div>

                <CardAnimated delay_ms=180>
                    <button
                        class="client-history-link"
                        on:click=move |_| nav.navigate(Page::VehicleHistory)
                    >
                        <span class="client-history-link__icon">{icon("history")}</span>
                        <div>
                            <h3>"Histórico de Serviços"</h3>
                            <p>"Veja todos os serviços já realizados no seu veículo"</p>
                        </div>
                    </button>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}

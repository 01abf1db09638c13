use super::model;
use super::view_model::ServiceChecklistViewModel;
use crate::layout::{use_navigation, use_toast, Page};
use crate::shared::components::ui::{Badge, Button, Checkbox, ProgressBar, RequirementBadge, Select, Textarea};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a004_service_checklist::aggregate::ServiceItem;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn ServiceChecklist() -> impl IntoView {
    let vm = ServiceChecklistViewModel::new();
    let nav = use_navigation();
    let toast = use_toast();

    let on_save = move |_: leptos::ev::MouseEvent| {
        vm.save_command();
        toast.success(
            "Checklist atualizado!",
            "As informações do serviço foram salvas com sucesso.",
        );
        nav.navigate(Page::AdminDashboard);
    };

    let service_row = move |service: ServiceItem| {
        let id = service.id;
        let required = service.required;
        let completed = Signal::derive(move || vm.is_completed(id));
        let row_class = move || {
            if completed.get() {
                "checklist-item checklist-item--done"
            } else {
                "checklist-item"
            }
        };
        view! {
            <div class=row_class>
                <Checkbox
                    id=format!("service-{}", id.as_string())
                    label=service.name
                    checked=completed
                    on_change=Callback::new(move |_: bool| vm.toggle(id))
                />
                <div class="checklist-item__badges">
                    <RequirementBadge required=required />
                    <Show when=move || completed.get()>
                        <Badge variant="success">{icon("check-circle")} " Concluído"</Badge>
                    </Show>
                </div>
            </div>
        }
    };

    view! {
        <PageFrame page=Page::ServiceChecklist>
            <PageHeader
                title="Checklist de Serviços"
                subtitle="Acompanhar progresso dos serviços"
                back_to=Page::AdminDashboard
            >
                <></>
            </PageHeader>

            <div class="page__content">
                <CardAnimated
                    title="Informações do Serviço"
                    icon_name="wrench"
                    class="form-grid form-grid--2"
                >
                    <Select
                        id="checklist-vehicle"
                        label="Veículo"
                        placeholder="Selecione o veículo"
                        value=vm.selected_vehicle
                        options=model::vehicle_options()
                        on_change=Callback::new(move |v: String| vm.selected_vehicle.set(v))
                    />
                    <Select
                        id="checklist-status"
                        label="Status Geral"
                        value=Signal::derive(move || vm.status().code().to_string())
                        options=model::status_options()
                        on_change=Callback::new(move |v: String| vm.set_status_code(&v))
                    />
                </CardAnimated>

                <div class="progress-grid">
                    <CardAnimated title="Progresso Geral" delay_ms=40>
                        <div class="progress-card__value">
                            {move || {
                                let p = vm.progress();
                                format!("{}/{}", p.completed, p.total)
                            }}
                        </div>
                        <ProgressBar value=Signal::derive(move || vm.progress().overall) />
                        <p class="progress-card__hint">
                            {move || format!("{:.0}% concluído", vm.progress().overall)}
                        </p>
                    </CardAnimated>
                    <CardAnimated title="Serviços Obrigatórios" delay_ms=80>
                        <div class="progress-card__value">
                            {move || {
                                let p = vm.progress();
                                format!("{}/{}", p.completed_required, p.required)
                            }}
                        </div>
                        <ProgressBar value=Signal::derive(move || vm.progress().required_pct) />
                        <p class="progress-card__hint">
                            {move || format!("{:.0}% concluído", vm.progress().required_pct)}
                        </p>
                    </CardAnimated>
                    <CardAnimated title="Status Atual" delay_ms=120>
                        {move || {
                            let status = vm.status();
                            view! {
                                <Badge variant=status.badge_variant() class="badge--large">
                                    {icon(status.icon_name())}
                                    " "
                                    {status.label()}
                                </Badge>
                            }
                        }}
                    </CardAnimated>
                </div>

                <CardAnimated
                    title="Lista de Serviços"
                    description="Marque os serviços conforme forem sendo concluídos"
                    icon_name="check-square"
                    delay_ms=160
                >
                    <div class="checklist">
                        <For
                            each=move || vm.checklist.get().services
                            key=|service| service.id
                            children=service_row
                        />
                    </div>
                </CardAnimated>

                <CardAnimated title="Observações" delay_ms=200>
                    <Textarea
                        id="checklist-observations"
                        placeholder="Adicione observações sobre o serviço..."
                        rows=4
                        value=vm.observations
                        on_input=Callback::new(move |v: String| vm.observations.set(v))
                    />
                </CardAnimated>

                <div class="details-actions">
                    <Button variant="accent" size="lg" on_click=Callback::new(on_save)>
                        {icon("save")}
                        " Salvar Checklist"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}

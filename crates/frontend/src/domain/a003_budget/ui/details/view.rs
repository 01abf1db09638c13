use super::model;
use super::view_model::BudgetCreationViewModel;
use crate::layout::{use_navigation, use_toast, Page};
use crate::shared::components::ui::{Button, Input, RequirementBadge, Select, Textarea};
use crate::shared::components::{CardAnimated, PageHeader, SummaryRow};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::use_app_config;
use contracts::domain::a003_budget::aggregate::{BudgetItem, BudgetItemUpdate, BudgetTotals};
use contracts::domain::common::AggregateId;
use contracts::shared::format::format_money;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use rust_decimal::Decimal;

fn requirement_options() -> Vec<(String, String)> {
    vec![
        ("required".to_string(), "Obrigatório".to_string()),
        ("optional".to_string(), "Opcional".to_string()),
    ]
}

#[component]
pub fn BudgetCreation() -> impl IntoView {
    let vm = BudgetCreationViewModel::new();
    let nav = use_navigation();
    let toast = use_toast();
    let currency = use_app_config().shop.currency_symbol;

    let money = move |select: fn(&BudgetTotals) -> Decimal| {
        let currency = currency.clone();
        Signal::derive(move || format_money(select(&vm.totals()), &currency))
    };

    let on_add = move |_: MouseEvent| {
        let _ = vm.add_item_command();
    };

    let on_generate = move |_: MouseEvent| match vm.generate_command() {
        Ok(_) => {
            toast.success(
                "Orçamento gerado com sucesso!",
                "O orçamento foi enviado para aprovação do cliente.",
            );
            nav.navigate(Page::AdminDashboard);
        }
        Err(e) => toast.error("Erro", e.to_string()),
    };

    let item_row = move |item: BudgetItem| {
        let id = item.id;
        let price_text = RwSignal::new(item.price.to_string());
        let required = Signal::derive(move || {
            vm.budget
                .with(|b| b.items.iter().any(|i| i.id == id && i.required))
        });
        view! {
            <div class="budget-item">
                <div class="budget-item__fields">
                    <Input
                        id=format!("budget-item-{}-description", id.as_string())
                        label="Descrição"
                        value=Signal::derive(move || vm.item_description(id))
                        on_input=Callback::new(move |v: String| {
                            vm.update_item(id, BudgetItemUpdate::Description(v))
                        })
                    />
                    <Input
                        id=format!("budget-item-{}-price", id.as_string())
                        label="Valor"
                        input_type="number"
                        step="0.01"
                        value=price_text
                        on_input=Callback::new(move |v: String| {
                            price_text.set(v.clone());
                            vm.update_item(id, BudgetItemUpdate::PriceText(v));
                        })
                    />
                </div>
                <div class="budget-item__actions">
                    <RequirementBadge required=required />
                    <Button
                        variant="ghost"
                        size="sm"
                        on_click=Callback::new(move |_| vm.remove_item(id))
                    >
                        {icon("trash")}
                    </Button>
                </div>
            </div>
        }
    };

    view! {
        <PageFrame page=Page::BudgetCreation>
            <PageHeader
                title="Criar Orçamento"
                subtitle="Elaborar orçamento detalhado para o cliente"
                back_to=Page::AdminDashboard
            >
                <></>
            </PageHeader>

            <div class="page__content budget-layout">
                <div class="budget-layout__main">
                    <CardAnimated
                        title="Informações do Orçamento"
                        icon_name="file-text"
                        class="form-grid form-grid--2"
                    >
                        <Select
                            id="budget-vehicle"
                            label="Veículo *"
                            placeholder="Selecione o veículo"
                            value=Signal::derive(move || vm.header.get().selected_vehicle)
                            options=model::vehicle_options()
                            on_change=Callback::new(move |v: String| {
                                vm.header.update(|h| h.selected_vehicle = v)
                            })
                        />
                        <Input
                            id="budget-date"
                            label="Data Estimada de Entrega"
                            input_type="date"
                            value=Signal::derive(move || vm.header.get().estimated_date)
                            on_input=Callback::new(move |v: String| {
                                vm.header.update(|h| h.estimated_date = v)
                            })
                        />
                    </CardAnimated>

                    <CardAnimated
                        title="Itens do Orçamento"
                        description="Adicione os serviços e peças necessários"
                        icon_name="calculator"
                        delay_ms=60
                    >
                        <div class="budget-new-item">
                            <Input
                                label="Descrição"
                                placeholder="Ex: Troca de pastilhas de freio"
                                value=Signal::derive(move || vm.new_item.get().description)
                                on_input=Callback::new(move |v: String| {
                                    vm.new_item.update(|dto| dto.description = v)
                                })
                            />
                            <Input
                                label="Valor (R$)"
                                input_type="number"
                                step="0.01"
                                placeholder="0.00"
                                value=Signal::derive(move || vm.new_item.get().price)
                                on_input=Callback::new(move |v: String| {
                                    vm.new_item.update(|dto| dto.price = v)
                                })
                            />
                            <Select
                                label="Tipo"
                                value=Signal::derive(move || {
                                    let code = if vm.new_item.get().required { "required" } else { "optional" };
                                    code.to_string()
                                })
                                options=requirement_options()
                                on_change=Callback::new(move |v: String| {
                                    vm.new_item.update(|dto| dto.required = v == "required")
                                })
                            />
                            <Button
                                variant="accent"
                                disabled=Signal::derive(move || !vm.can_add_item())
                                on_click=Callback::new(on_add)
                            >
                                {icon("plus")}
                                " Adicionar"
                            </Button>
                        </div>

                        <Show
                            when=move || !vm.budget.with(|b| b.is_empty())
                            fallback=|| view! {
                                <p class="empty-state">"Nenhum item adicionado ao orçamento"</p>
                            }
                        >
                            <div class="budget-items">
                                <For
                                    each=move || vm.budget.get().items
                                    key=|item| item.id
                                    children=item_row
                                />
                            </div>
                        </Show>
                    </CardAnimated>

                    <CardAnimated title="Observações" delay_ms=120>
                        <Textarea
                            id="budget-observations"
                            placeholder="Informações adicionais sobre o orçamento..."
                            rows=4
                            value=Signal::derive(move || vm.header.get().observations)
                            on_input=Callback::new(move |v: String| {
                                vm.header.update(|h| h.observations = v)
                            })
                        />
                    </CardAnimated>
                </div>

                <aside class="budget-layout__summary">
                    <CardAnimated title="Resumo do Orçamento" delay_ms=80>
                        <SummaryRow label="Serviços Obrigatórios:" value=money(|t| t.required) />
                        <SummaryRow label="Serviços Opcionais:" value=money(|t| t.optional) />
                        <SummaryRow label="Total Geral:" value=money(|t| t.grand) strong=true />
                        {move || vm.estimated_date_label().map(|date| view! {
                            <div class="summary-row summary-row--muted">
                                {icon("calendar")}
                                <span>"Previsão: " {date}</span>
                            </div>
                        })}
                        <Button variant="accent" size="lg" class="button--block" on_click=Callback::new(on_generate)>
                            {icon("save")}
                            " Gerar Orçamento"
                        </Button>
                    </CardAnimated>
                </aside>
            </div>
        </PageFrame>
    }
}

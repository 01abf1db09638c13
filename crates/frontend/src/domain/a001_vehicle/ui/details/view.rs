use super::model;
use super::view_model::VehicleRegistrationViewModel;
use crate::layout::{use_navigation, use_toast, Page};
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a002_client::aggregate::ClientMode;
use leptos::prelude::*;

#[component]
pub fn VehicleRegistration() -> impl IntoView {
    let vm = VehicleRegistrationViewModel::new();
    let nav = use_navigation();
    let toast = use_toast();

    let client_modes = vec![
        (ClientMode::Existing.code().to_string(), ClientMode::Existing.label().to_string()),
        (ClientMode::New.code().to_string(), ClientMode::New.label().to_string()),
    ];

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match vm.submit_command() {
            Ok(vehicle) => {
                toast.success(
                    "Veículo cadastrado com sucesso!",
                    format!("{} foi adicionado ao sistema.", vehicle.plate),
                );
                nav.navigate(Page::AdminDashboard);
            }
            Err(e) => toast.error("Erro", e.to_string()),
        }
    };

    view! {
        <PageFrame page=Page::VehicleRegistration narrow=true>
            <PageHeader
                title="Cadastro de Veículo"
                subtitle="Adicionar novo veículo ao sistema"
                back_to=Page::AdminDashboard
            >
                <></>
            </PageHeader>

            <form class="page__content details-form" on:submit=on_submit>
                <CardAnimated
                    title="Dados do Veículo"
                    description="Informações básicas do veículo a ser cadastrado"
                    icon_name="car"
                    class="form-grid form-grid--2"
                >
                    <Input
                        id="plate"
                        label="Placa *"
                        placeholder="ABC-1234"
                        maxlength=8
                        value=Signal::derive(move || vm.form.get().plate)
                        on_input=Callback::new(move |v: String| vm.set_plate(v))
                    />
                    <Input
                        id="model"
                        label="Modelo *"
                        placeholder="Honda Civic 2020"
                        value=Signal::derive(move || vm.form.get().model)
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.model = v))
                    />
                    <Input
                        id="year"
                        label="Ano *"
                        input_type="number"
                        placeholder="2020"
                        value=Signal::derive(move || vm.form.get().year)
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.year = v))
                    />
                    <Input
                        id="mileage"
                        label="Quilometragem *"
                        input_type="number"
                        placeholder="45000"
                        value=Signal::derive(move || vm.form.get().mileage)
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.mileage = v))
                    />
                </CardAnimated>

                <CardAnimated
                    title="Cliente"
                    description="Associe o veículo a um cliente existente ou cadastre um novo"
                    icon_name="user"
                    delay_ms=80
                >
                    <Select
                        id="client-mode"
                        label="Tipo de Cliente"
                        value=Signal::derive(move || vm.client_mode.get().code().to_string())
                        options=client_modes
                        on_change=Callback::new(move |v: String| vm.client_mode.set(ClientMode::from_code(&v)))
                    />

                    {move || if vm.is_new_client() {
                        view! {
                            <div class="form-grid form-grid--2">
                                <Input
                                    id="client-name"
                                    label="Nome Completo *"
                                    placeholder="João Silva"
                                    value=Signal::derive(move || vm.client.get().name)
                                    on_input=Callback::new(move |v: String| vm.client.update(|c| c.name = v))
                                />
                                <Input
                                    id="client-cpf"
                                    label="CPF *"
                                    placeholder="123.456.789-00"
                                    maxlength=14
                                    value=Signal::derive(move || vm.client.get().cpf)
                                    on_input=Callback::new(move |v: String| vm.set_client_cpf(v))
                                />
                                <Input
                                    id="client-phone"
                                    label="Telefone *"
                                    placeholder="(11) 99999-9999"
                                    maxlength=15
                                    value=Signal::derive(move || vm.client.get().phone)
                                    on_input=Callback::new(move |v: String| vm.set_client_phone(v))
                                />
                                <Textarea
                                    id="client-address"
                                    label="Endereço *"
                                    placeholder="Rua das Flores, 123 - Centro - São Paulo/SP"
                                    value=Signal::derive(move || vm.client.get().address)
                                    on_input=Callback::new(move |v: String| vm.client.update(|c| c.address = v))
                                />
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <Select
                                id="client-id"
                                label="Cliente Existente"
                                placeholder="Selecione um cliente"
                                value=Signal::derive(move || vm.form.get().client_id)
                                options=model::client_options()
                                on_change=Callback::new(move |v: String| vm.form.update(|f| f.client_id = v))
                            />
                        }.into_any()
                    }}
                </CardAnimated>

                <div class="details-actions">
                    <Button
                        variant="outline"
                        on_click=Callback::new(move |_| nav.navigate(Page::AdminDashboard))
                    >
                        "Cancelar"
                    </Button>
                    <Button variant="accent" size="lg" button_type="submit">
                        {icon("save")}
                        " Cadastrar Veículo"
                    </Button>
                </div>
            </form>
        </PageFrame>
    }
}

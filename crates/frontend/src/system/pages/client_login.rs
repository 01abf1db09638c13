use leptos::prelude::*;

use crate::layout::{use_navigation, Page};
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::use_app_config;
use contracts::shared::format::{format_cpf, format_plate};

/// (icon, title, text) tiles under the login form
const FEATURES: &[(&str, &str, &str)] = &[
    ("shield", "Seguro", "Acesso protegido aos seus dados"),
    ("search", "Transparente", "Acompanhe cada etapa do serviço"),
    ("wrench", "Profissional", "Equipe técnica qualificada"),
];

#[component]
pub fn ClientLoginPage() -> impl IntoView {
    let (cpf, set_cpf) = signal(String::new());
    let (plate, set_plate) = signal(String::new());
    let nav = use_navigation();
    let config = use_app_config();

    // There is no client store behind the form; any input opens the dashboard
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("client login: plate {}", plate.get_untracked());
        nav.navigate(Page::ClientDashboard);
    };

    let features = FEATURES
        .iter()
        .map(|&(icon_name, title, text)| {
            view! {
                <div class="login-feature">
                    <span class="login-feature__icon">{icon(icon_name)}</span>
                    <h4>{title}</h4>
                    <p>{text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page=Page::ClientLogin narrow=true>
            <header class="login-header">
                <span class="login-header__brand">{icon("car")} " " {config.shop.name}</span>
                <Button
                    variant="ghost"
                    on_click=Callback::new(move |_| nav.navigate(Page::AdminDashboard))
                >
                    "Área Administrativa"
                </Button>
            </header>

            <div class="login-container">
                <CardAnimated
                    title="Acesso do Cliente"
                    description="Informe seu CPF e a placa do veículo para acompanhar o serviço"
                    icon_name="user"
                >
                    <form class="login-form" on:submit=on_submit>
                        <Input
                            id="cpf"
                            label="CPF"
                            placeholder="000.000.000-00"
                            maxlength=14
                            required=true
                            value=cpf
                            on_input=Callback::new(move |v: String| set_cpf.set(format_cpf(&v)))
                        />
                        <Input
                            id="plate"
                            label="Placa do Veículo"
                            placeholder="ABC-1234"
                            maxlength=8
                            required=true
                            value=plate
                            on_input=Callback::new(move |v: String| set_plate.set(format_plate(&v)))
                        />
                        <Button variant="accent" size="lg" button_type="submit" class="button--block">
                            "Acessar"
                        </Button>
                    </form>
                </CardAnimated>

                <div class="login-features">{features}</div>
            </div>
        </PageFrame>
    }
}

use leptos::prelude::*;

use crate::layout::{use_navigation, Page};
use crate::shared::components::ui::Button;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::use_app_config;

/// (icon, title, text) of the feature grid
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "bar-chart",
        "Dashboard Completo",
        "Visualize o status de todos os veículos em tempo real",
    ),
    (
        "car",
        "Gestão de Veículos",
        "Cadastre e acompanhe veículos e seus proprietários",
    ),
    (
        "users",
        "Área do Cliente",
        "Clientes acompanham o serviço com CPF e placa",
    ),
    (
        "file-text",
        "Orçamentos Detalhados",
        "Separe serviços obrigatórios e opcionais com totais automáticos",
    ),
    (
        "check-square",
        "Checklist de Serviços",
        "Controle o progresso de cada serviço realizado",
    ),
    (
        "history",
        "Histórico Completo",
        "Consulte todos os serviços já realizados em cada veículo",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = use_navigation();
    let config = use_app_config();

    let entry_buttons = move || {
        view! {
            <div class="landing-actions">
                <Button
                    variant="accent"
                    size="lg"
                    on_click=Callback::new(move |_| nav.navigate(Page::AdminDashboard))
                >
                    {icon("wrench")}
                    " Área Administrativa"
                </Button>
                <Button
                    variant="outline"
                    size="lg"
                    on_click=Callback::new(move |_| nav.navigate(Page::ClientLogin))
                >
                    {icon("user")}
                    " Área do Cliente"
                </Button>
            </div>
        }
    };

    let features = FEATURES
        .iter()
        .enumerate()
        .map(|(i, &(icon_name, title, text))| {
            view! {
                <CardAnimated delay_ms={i as u32 * 60} title=title icon_name=icon_name>
                    <p class="landing-feature__text">{text}</p>
                </CardAnimated>
            }
        })
        .collect_view();

    view! {
        <PageFrame page=Page::Landing>
            <section class="landing-hero">
                <div class="landing-hero__logo">{icon("car")}</div>
                <h1 class="landing-hero__title">{config.shop.name.clone()}</h1>
                <p class="landing-hero__tagline">{config.shop.tagline}</p>
                {entry_buttons()}
            </section>

            <section class="landing-features">
                <h2>"Tudo que sua oficina precisa"</h2>
                <div class="landing-features__grid">{features}</div>
            </section>

            <section class="landing-cta">
                <h2>{format!("Comece a usar o {} hoje", config.shop.name)}</h2>
                <p>"Organize sua oficina e ofereça mais transparência aos seus clientes."</p>
                {entry_buttons()}
            </section>
        </PageFrame>
    }
}

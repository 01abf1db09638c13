use crate::layout::{use_navigation, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - header bar of every inner view
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Renders a "Voltar" button leading to this page
    #[prop(optional)]
    back_to: Option<Page>,

    /// Children content (pass empty fragment if not needed)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let nav = use_navigation();

    view! {
        <header class="page-header">
            <div class="page-header__content">
                {back_to.map(|page| view! {
                    <button class="button button--outline" on:click=move |_| nav.navigate(page)>
                        {icon("arrow-left")}
                        " Voltar"
                    </button>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </header>
    }
}

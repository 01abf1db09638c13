//! CardAnimated: Thaw `Card` with an appear animation and an optional
//! title/description header, the building block of every view.
//!
//! ```text
//! <CardAnimated title="Observações" description="Informações adicionais" delay_ms=80>
//!     <Textarea value=... />
//! </CardAnimated>
//! ```
//! The animation lives in `style.css` (`@keyframes card-appear`).

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in ms, for a stagger effect across a grid
    #[prop(optional)]
    delay_ms: u32,
    /// Card title; no header is rendered when empty
    #[prop(optional, into)]
    title: String,
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Optional icon shown before the title
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Extra CSS class on the content wrapper
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let has_header = !title.is_empty();

    view! {
        <Card attr:style=style>
            {has_header.then(|| view! {
                <div class="card__header">
                    <h3 class="card__title">
                        {icon_name.map(crate::shared::icons::icon)}
                        {title}
                    </h3>
                    {move || description.get().map(|d| view! {
                        <p class="card__description">{d}</p>
                    })}
                </div>
            })}
            <div class=format!("card__content {}", class)>
                {children()}
            </div>
        </Card>
    }
}

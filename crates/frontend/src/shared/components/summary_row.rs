use leptos::prelude::*;

/// Label/value line used in totals panels
#[component]
pub fn SummaryRow(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    /// Emphasized grand-total style
    #[prop(optional)]
    strong: bool,
) -> impl IntoView {
    let class = if strong {
        "summary-row summary-row--total"
    } else {
        "summary-row"
    };

    view! {
        <div class=class>
            <span class="summary-row__label">{label}</span>
            <span class="summary-row__value">{move || value.get()}</span>
        </div>
    }
}

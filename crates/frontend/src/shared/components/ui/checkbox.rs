use leptos::prelude::*;

/// Checkbox row; the label is struck through while checked
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let label_class = move || {
        if checked.get() {
            "form__checkbox-label form__checkbox-label--done"
        } else {
            "form__checkbox-label"
        }
    };

    view! {
        <label class="form__checkbox-wrapper">
            <input
                id=move || id.get()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(on_change) = on_change {
                        on_change.run(event_target_checked(&ev));
                    }
                }
            />
            <span class=label_class>{move || label.get()}</span>
        </label>
    }
}

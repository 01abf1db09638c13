use super::field::FormField;
use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Defaults to 3
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <FormField label=label control_id=id>
            <textarea
                id=move || id.get()
                class="form__textarea"
                placeholder=move || placeholder.get()
                rows=rows.unwrap_or(3).to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
        </FormField>
    }
}

use super::field::FormField;
use leptos::prelude::*;

/// Controlled text input; `on_input` receives the raw value on every keystroke
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// `text` unless set (`number`, `date`, ...)
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    maxlength: Option<u32>,
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let kind = move || input_type.get().unwrap_or_else(|| "text".into());

    view! {
        <FormField label=label control_id=id>
            <input
                id=move || id.get()
                class="form__input"
                type=kind
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                required=required
                maxlength=maxlength.map(|max| max.to_string())
                step=move || step.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
        </FormField>
    }
}

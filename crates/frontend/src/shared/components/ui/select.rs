use super::field::FormField;
use leptos::prelude::*;

/// Select over `(value, label)` pairs.
///
/// With a `placeholder`, an empty disabled first option is shown while
/// `value` is empty.
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <FormField label=label control_id=id>
            <select
                id=move || id.get()
                class="form__select"
                on:change=move |ev| {
                    if let Some(on_change) = on_change {
                        on_change.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|text| view! {
                    <option value="" disabled=true selected=move || value.get().is_empty()>
                        {text}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|(code, _)| code.clone()
                    children=move |(code, text)| {
                        let selected = {
                            let code = code.clone();
                            move || value.get() == code
                        };
                        view! { <option value=code selected=selected>{text}</option> }
                    }
                />
            </select>
        </FormField>
    }
}

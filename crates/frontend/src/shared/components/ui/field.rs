use leptos::prelude::*;

/// Label + control wrapper shared by the form primitives
#[component]
pub fn FormField(
    #[prop(into)]
    label: MaybeProp<String>,
    /// Id of the wrapped control, for the label's `for`
    #[prop(into)]
    control_id: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|text| view! {
                <label class="form__label" for=move || control_id.get()>{text}</label>
            })}
            {children()}
        </div>
    }
}

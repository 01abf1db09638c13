use leptos::prelude::*;

/// Horizontal progress bar, `value` in percent
#[component]
pub fn ProgressBar(
    #[prop(into)]
    value: Signal<f64>,
) -> impl IntoView {
    let width = move || format!("width: {:.0}%;", value.get().clamp(0.0, 100.0));

    view! {
        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100">
            <div class="progress__bar" style=width></div>
        </div>
    }
}

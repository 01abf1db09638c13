use leptos::prelude::*;

/// CSS classes for a variant (`primary`, `accent`, `outline`, `ghost`) and a
/// size (`sm`, `lg`, anything else is medium)
fn button_class(variant: Option<&str>, size: Option<&str>) -> String {
    let variant = match variant {
        Some("accent") => "button--accent",
        Some("outline") => "button--outline",
        Some("ghost") => "button--ghost",
        _ => "button--primary",
    };
    match size {
        Some("sm") => format!("button {} button--small", variant),
        Some("lg") => format!("button {} button--large", variant),
        _ => format!("button {}", variant),
    }
}

#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Extra classes appended after the variant ones
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// `button` unless set; forms pass `submit`
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let css = move || {
        let base = button_class(variant.get().as_deref(), size.get().as_deref());
        match class.get() {
            Some(extra) => format!("{} {}", base, extra),
            None => base,
        }
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".into())
            class=css
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(None, None), "button button--primary");
        assert_eq!(
            button_class(Some("accent"), Some("lg")),
            "button button--accent button--large"
        );
        assert_eq!(
            button_class(Some("unknown"), Some("sm")),
            "button button--primary button--small"
        );
    }
}

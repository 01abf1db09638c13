use leptos::prelude::*;

fn badge_class(variant: Option<&str>) -> &'static str {
    match variant {
        Some("primary") => "badge badge--primary",
        Some("secondary") => "badge badge--secondary",
        Some("success") => "badge badge--success",
        Some("warning") => "badge badge--warning",
        Some("error") => "badge badge--error",
        Some("outline") => "badge badge--outline",
        _ => "badge badge--neutral",
    }
}

/// Pill label. `variant` is one of the names returned by the status
/// enums' `badge_variant()`, or `secondary` / `outline`.
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let css = move || {
        let base = badge_class(variant.get().as_deref());
        match class.get() {
            Some(extra) => format!("{} {}", base, extra),
            None => base.to_string(),
        }
    };

    view! { <span class=css>{children()}</span> }
}

/// "Obrigatório" / "Opcional" badge of budget and checklist items
#[component]
pub fn RequirementBadge(
    #[prop(into)]
    required: Signal<bool>,
) -> impl IntoView {
    let variant = Signal::derive(move || {
        let name = if required.get() { "primary" } else { "secondary" };
        name.to_string()
    });

    view! {
        <Badge variant=variant>
            {move || if required.get() { "Obrigatório" } else { "Opcional" }}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_matches_status_variants() {
        use contracts::enums::{HistoryStatus, VehicleStatus};

        for status in VehicleStatus::all() {
            assert_ne!(badge_class(Some(status.badge_variant())), "badge badge--neutral");
        }
        assert_eq!(
            badge_class(Some(HistoryStatus::Cancelled.badge_variant())),
            "badge badge--error"
        );
        assert_eq!(badge_class(None), "badge badge--neutral");
    }
}

use crate::shared::icons::icon;
use contracts::domain::a001_vehicle::aggregate::StatusAggregate;
use leptos::prelude::*;

/// Counter card of the admin dashboard, styled by vehicle status
#[component]
pub fn StatusCard(aggregate: StatusAggregate) -> impl IntoView {
    let status = aggregate.status;
    let card_class = format!("status-card status-card--{}", status.code());

    view! {
        <div class=card_class>
            <div class="status-card__header">
                <span class="status-card__title">{status.label()}</span>
                <span class="status-card__icon">{icon(status.icon_name())}</span>
            </div>
            <div class="status-card__count">{aggregate.count}</div>
            <p class="status-card__description">{aggregate.description}</p>
        </div>
    }
}

use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a001_vehicle::aggregate::VehicleSummary;
use contracts::shared::format::format_mileage;
use leptos::prelude::*;

#[component]
pub fn VehicleCard(vehicle: VehicleSummary) -> impl IntoView {
    let status = vehicle.status;
    let card_class = format!("vehicle-card vehicle-card--{}", status.code());

    view! {
        <div class=card_class>
            <div class="vehicle-card__header">
                <span class="vehicle-card__plate">{icon("car")} {vehicle.plate}</span>
                <Badge variant=status.badge_variant()>{status.label()}</Badge>
            </div>
            <div class="vehicle-card__body">
                <h3 class="vehicle-card__model">{vehicle.model}</h3>
                <p class="vehicle-card__year">{vehicle.year}</p>
                <div class="vehicle-card__meta">
                    {icon("map-pin")}
                    <span>{format_mileage(vehicle.mileage)}</span>
                </div>
                {vehicle.estimated_date.map(|date| view! {
                    <div class="vehicle-card__meta">
                        {icon("calendar")}
                        <span>"Previsão: " {date}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

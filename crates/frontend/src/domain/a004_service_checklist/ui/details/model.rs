use contracts::domain::a004_service_checklist::aggregate::ServiceChecklist;
use contracts::enums::VehicleStatus;
use contracts::seed;

pub fn fetch_checklist() -> ServiceChecklist {
    seed::checklist()
}

pub fn vehicle_options() -> Vec<(String, String)> {
    seed::vehicle_options()
        .into_iter()
        .map(|v| (v.plate.clone(), v.label_with_owner()))
        .collect()
}

pub fn status_options() -> Vec<(String, String)> {
    VehicleStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect()
}

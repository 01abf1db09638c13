use contracts::domain::a003_budget::aggregate::Budget;
use contracts::seed;

pub fn fetch_initial_budget() -> Budget {
    seed::budget_items()
}

/// (plate, "plate - model year - owner") pairs for the vehicle select
pub fn vehicle_options() -> Vec<(String, String)> {
    seed::vehicle_options()
        .into_iter()
        .map(|v| (v.plate.clone(), v.label_with_owner()))
        .collect()
}

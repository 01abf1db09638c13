use contracts::domain::a002_client::aggregate::ClientSummary;
use contracts::seed;

/// Clients offered in the "existing client" select
pub fn fetch_clients() -> Vec<ClientSummary> {
    seed::clients()
}

pub fn client_options() -> Vec<(String, String)> {
    fetch_clients()
        .into_iter()
        .map(|c| (c.id.clone(), c.display_label()))
        .collect()
}

//! Sample data the views mount with.
//!
//! Every call builds fresh values, so each view instance owns its copy and
//! nothing is shared between views.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::a001_vehicle::aggregate::{StatusAggregate, VehicleOption, VehicleSummary};
use crate::domain::a002_client::aggregate::ClientSummary;
use crate::domain::a003_budget::aggregate::{Budget, BudgetItem};
use crate::domain::a004_service_checklist::aggregate::{ServiceChecklist, ServiceItem};
use crate::domain::a005_service_history::aggregate::HistoryEntry;
use crate::enums::{HistoryStatus, VehicleStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn status_aggregates() -> Vec<StatusAggregate> {
    vec![
        StatusAggregate {
            status: VehicleStatus::Waiting,
            count: 8,
            description: "Veículos na fila".into(),
        },
        StatusAggregate {
            status: VehicleStatus::Progress,
            count: 5,
            description: "Serviços em andamento".into(),
        },
        StatusAggregate {
            status: VehicleStatus::Completed,
            count: 12,
            description: "Finalizados hoje".into(),
        },
    ]
}

pub fn vehicles_in_progress() -> Vec<VehicleSummary> {
    vec![
        VehicleSummary {
            plate: "ABC-1234".into(),
            model: "Honda Civic".into(),
            year: 2020,
            mileage: 45000,
            status: VehicleStatus::Progress,
            estimated_date: Some("15/01/2025".into()),
        },
        VehicleSummary {
            plate: "XYZ-5678".into(),
            model: "Toyota Corolla".into(),
            year: 2019,
            mileage: 67000,
            status: VehicleStatus::Waiting,
            estimated_date: Some("16/01/2025".into()),
        },
        VehicleSummary {
            plate: "DEF-9012".into(),
            model: "Ford Focus".into(),
            year: 2021,
            mileage: 23000,
            status: VehicleStatus::Completed,
            estimated_date: Some("14/01/2025".into()),
        },
    ]
}

pub fn vehicle_options() -> Vec<VehicleOption> {
    vec![
        VehicleOption {
            plate: "ABC-1234".into(),
            model: "Honda Civic".into(),
            year: 2020,
            owner: "João Silva".into(),
        },
        VehicleOption {
            plate: "XYZ-5678".into(),
            model: "Toyota Corolla".into(),
            year: 2019,
            owner: "Maria Santos".into(),
        },
        VehicleOption {
            plate: "DEF-9012".into(),
            model: "Ford Focus".into(),
            year: 2021,
            owner: "Carlos Oliveira".into(),
        },
    ]
}

pub fn clients() -> Vec<ClientSummary> {
    vec![
        ClientSummary {
            id: "1".into(),
            name: "João Silva".into(),
            cpf: "123.456.789-00".into(),
        },
        ClientSummary {
            id: "2".into(),
            name: "Maria Santos".into(),
            cpf: "987.654.321-00".into(),
        },
        ClientSummary {
            id: "3".into(),
            name: "Carlos Oliveira".into(),
            cpf: "456.789.123-00".into(),
        },
    ]
}

/// Starting items of the budget builder
pub fn budget_items() -> Budget {
    Budget::new(vec![
        BudgetItem::new("Troca de óleo", Decimal::from(80), true),
        BudgetItem::new("Filtro de ar", Decimal::from(45), true),
    ])
}

/// Starting items of the service checklist
pub fn checklist() -> ServiceChecklist {
    ServiceChecklist::new(vec![
        ServiceItem::new("Troca de óleo do motor", true, true),
        ServiceItem::new("Substituição do filtro de ar", true, true),
        ServiceItem::new("Revisão do sistema de freios", false, true),
        ServiceItem::new("Verificação de pneus e calibragem", false, true),
        ServiceItem::new("Alinhamento e balanceamento", false, false),
        ServiceItem::new("Limpeza de bicos injetores", false, false),
    ])
}

/// Past visits, most recent first
pub fn history() -> Vec<HistoryEntry> {
    let services = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        HistoryEntry {
            id: "1".into(),
            date: date(2024, 12, 15),
            services: services(&["Troca de óleo", "Filtro de ar", "Revisão geral"]),
            status: HistoryStatus::Completed,
            total: Decimal::from(350),
            observations: Some("Serviço realizado conforme planejado. Cliente satisfeito.".into()),
        },
        HistoryEntry {
            id: "2".into(),
            date: date(2024, 8, 22),
            services: services(&["Alinhamento", "Balanceamento", "Calibragem"]),
            status: HistoryStatus::Completed,
            total: Decimal::from(120),
            observations: None,
        },
        HistoryEntry {
            id: "3".into(),
            date: date(2024, 5, 10),
            services: services(&["Pastilhas de freio", "Discos de freio", "Fluido de freio"]),
            status: HistoryStatus::Completed,
            total: Decimal::from(480),
            observations: Some(
                "Freios estavam muito desgastados. Recomendada verificação a cada 6 meses.".into(),
            ),
        },
        HistoryEntry {
            id: "4".into(),
            date: date(2024, 2, 18),
            services: services(&["Troca de pneus", "Alinhamento"]),
            status: HistoryStatus::Cancelled,
            total: Decimal::ZERO,
            observations: Some("Cliente cancelou o serviço antes da execução.".into()),
        },
        HistoryEntry {
            id: "5".into(),
            date: date(2023, 11, 30),
            services: services(&["Revisão dos 20.000 km", "Troca de correia dentada"]),
            status: HistoryStatus::Completed,
            total: Decimal::from(650),
            observations: None,
        },
    ]
}

// ============================================================================
// Client dashboard
// ============================================================================

pub fn client_vehicle() -> VehicleSummary {
    VehicleSummary {
        plate: "ABC-1234".into(),
        model: "Honda Civic".into(),
        year: 2020,
        mileage: 45000,
        status: VehicleStatus::Progress,
        estimated_date: Some("15/01/2025".into()),
    }
}

pub fn client_last_update() -> String {
    "14/01/2025 14:30".into()
}

pub fn client_services() -> ServiceChecklist {
    let mut checklist = ServiceChecklist::new(vec![
        ServiceItem::new("Troca de óleo", true, true),
        ServiceItem::new("Filtro de ar", true, true),
        ServiceItem::new("Revisão de freios", false, true),
        ServiceItem::new("Alinhamento", false, false),
    ]);
    checklist.set_status(VehicleStatus::Progress);
    checklist
}

pub fn client_budget() -> Budget {
    Budget::new(vec![
        BudgetItem::new("Troca de óleo + filtro", Decimal::from(120), true),
        BudgetItem::new("Pastilhas de freio", Decimal::from(280), true),
        BudgetItem::new("Alinhamento", Decimal::from(80), false),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_most_recent_first() {
        let history = history();
        assert!(history.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_client_budget_total() {
        assert_eq!(client_budget().totals().grand, Decimal::from(480));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let checklist = checklist();
        let mut ids: Vec<_> = checklist.services.iter().map(|s| s.id).collect();
        ids.sort_by_key(|id| id.value());
        ids.dedup();
        assert_eq!(ids.len(), checklist.services.len());
    }
}

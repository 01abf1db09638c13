use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::HistoryStatus;

/// Immutable record of a past service visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub date: NaiveDate,
    /// Services performed, in the order they were listed
    pub services: Vec<String>,
    pub status: HistoryStatus,
    pub total: Decimal,
    pub observations: Option<String>,
}

/// Status selector of the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Cancelled,
}

impl StatusFilter {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Todos os Status",
            StatusFilter::Completed => "Concluídos",
            StatusFilter::Cancelled => "Cancelados",
        }
    }

    pub fn all() -> Vec<StatusFilter> {
        vec![
            StatusFilter::All,
            StatusFilter::Completed,
            StatusFilter::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(StatusFilter::All),
            "completed" => Some(StatusFilter::Completed),
            "cancelled" => Some(StatusFilter::Cancelled),
            _ => None,
        }
    }

    pub fn matches(&self, status: HistoryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => status == HistoryStatus::Completed,
            StatusFilter::Cancelled => status == HistoryStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl HistoryFilter {
    /// Whether the user narrowed the list in any way
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != StatusFilter::All
    }

    fn matches_search(&self, entry: &HistoryEntry) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        entry
            .services
            .iter()
            .any(|service| service.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        self.matches_search(entry) && self.status.matches(entry.status)
    }
}

/// Entries matching both the search term and the status, in list order
pub fn filter_history<'a>(entries: &'a [HistoryEntry], filter: &HistoryFilter) -> Vec<&'a HistoryEntry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}

/// Summary cards of the history view.
///
/// Always computed over the full list, whatever filter is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total_spent: Decimal,
    pub completed_count: usize,
    /// Date of the first (most recent) entry
    pub last_service_date: Option<NaiveDate>,
}

impl HistorySummary {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let completed = entries
            .iter()
            .filter(|entry| entry.status == HistoryStatus::Completed);
        let (total_spent, completed_count) = completed.fold(
            (Decimal::ZERO, 0usize),
            |(sum, count), entry| (sum + entry.total, count + 1),
        );
        Self {
            total_spent,
            completed_count,
            last_service_date: entries.first().map(|entry| entry.date),
        }
    }
}

/// "1 registro encontrado" / "3 registros encontrados"
pub fn records_found_label(count: usize) -> String {
    if count == 1 {
        format!("{} registro encontrado", count)
    } else {
        format!("{} registros encontrados", count)
    }
}

/// "1 serviço realizados" / "3 serviços realizados"
pub fn services_performed_label(count: usize) -> String {
    let noun = if count == 1 { "serviço" } else { "serviços" };
    format!("{} {} realizados", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, services: &[&str], status: HistoryStatus, total: i64) -> HistoryEntry {
        HistoryEntry {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            services: services.iter().map(|s| s.to_string()).collect(),
            status,
            total: Decimal::from(total),
            observations: None,
        }
    }

    fn entries() -> Vec<HistoryEntry> {
        vec![
            entry("1", &["Troca de óleo", "Filtro de ar"], HistoryStatus::Completed, 350),
            entry("2", &["Pastilhas de freio"], HistoryStatus::Completed, 480),
            entry("3", &["Troca de pneus"], HistoryStatus::Cancelled, 0),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let all = entries();
        let result = filter_history(&all, &HistoryFilter::default());
        assert_eq!(result.len(), 3);
        assert!(!HistoryFilter::default().is_active());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let all = entries();
        let filter = HistoryFilter {
            search: "FREIO".into(),
            status: StatusFilter::All,
        };
        let ids: Vec<_> = filter_history(&all, &filter).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_search_and_status_combine() {
        let all = entries();
        let filter = HistoryFilter {
            search: "troca".into(),
            status: StatusFilter::Cancelled,
        };
        let ids: Vec<_> = filter_history(&all, &filter).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
        assert!(filter.is_active());
    }

    #[test]
    fn test_status_filter_codes() {
        for filter in StatusFilter::all() {
            assert_eq!(StatusFilter::from_code(filter.code()), Some(filter));
        }
        assert!(StatusFilter::All.matches(HistoryStatus::Cancelled));
        assert!(!StatusFilter::Completed.matches(HistoryStatus::Cancelled));
    }

    #[test]
    fn test_summary_ignores_cancelled() {
        let summary = HistorySummary::from_entries(&entries());
        assert_eq!(summary.total_spent, Decimal::from(830));
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.last_service_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(HistorySummary::from_entries(&[]).last_service_date, None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(records_found_label(1), "1 registro encontrado");
        assert_eq!(records_found_label(0), "0 registros encontrados");
        assert_eq!(services_performed_label(1), "1 serviço realizados");
        assert_eq!(services_performed_label(3), "3 serviços realizados");
    }
}

use serde::{Deserialize, Serialize};

/// Final outcome of a past service visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Completed,
    Cancelled,
}

impl HistoryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            HistoryStatus::Completed => "completed",
            HistoryStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HistoryStatus::Completed => "Concluído",
            HistoryStatus::Cancelled => "Cancelado",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            HistoryStatus::Completed => "success",
            HistoryStatus::Cancelled => "error",
        }
    }
}

use contracts::domain::a003_budget::aggregate::{Budget, BudgetItem, BudgetItemUpdate};
use contracts::domain::a004_service_checklist::aggregate::{ServiceChecklist, ServiceItem};
use contracts::domain::a005_service_history::aggregate::{
    filter_history, HistoryFilter, HistorySummary, StatusFilter,
};
use contracts::enums::HistoryStatus;
use contracts::seed;
use contracts::shared::format::format_plate;
use rust_decimal::Decimal;

#[test]
fn budget_scenario_totals() {
    let budget = Budget::new(vec![
        BudgetItem::new("Troca de óleo", Decimal::from(80), true),
        BudgetItem::new("Filtro de ar", Decimal::from(45), true),
        BudgetItem::new("Alinhamento", Decimal::from(80), false),
    ]);
    let totals = budget.totals();
    assert_eq!(totals.required, Decimal::from(125));
    assert_eq!(totals.optional, Decimal::from(80));
    assert_eq!(totals.grand, Decimal::from(205));
}

#[test]
fn budget_totals_stay_consistent_through_edits() {
    let mut budget = seed::budget_items();
    let added = budget.add_item("Alinhamento", "80", false).unwrap();
    budget.add_item("", "10", true).unwrap_err();
    budget.add_item("Lavagem", "grátis", false).unwrap_err();

    let first = budget.items[0].id;
    budget.update_item(first, BudgetItemUpdate::PriceText("100".into()));
    budget.update_item(added, BudgetItemUpdate::Required(true));
    budget.remove_item(budget.items[1].id);

    let totals = budget.totals();
    assert_eq!(totals.required + totals.optional, totals.grand);
    assert!(totals.required >= Decimal::ZERO && totals.optional >= Decimal::ZERO);
    assert_eq!(totals.required, Decimal::from(180));
    assert_eq!(totals.optional, Decimal::ZERO);
}

#[test]
fn checklist_scenario_percentages() {
    let checklist = ServiceChecklist::new(vec![
        ServiceItem::new("A", true, true),
        ServiceItem::new("B", true, true),
        ServiceItem::new("C", false, true),
        ServiceItem::new("D", false, true),
        ServiceItem::new("E", false, false),
    ]);
    assert_eq!(checklist.overall_percentage(), 40.0);
    assert_eq!(checklist.required_percentage(), 50.0);
}

#[test]
fn seeded_checklist_starts_at_one_third() {
    let checklist = seed::checklist();
    assert_eq!(checklist.completed_count(), 2);
    assert_eq!(checklist.total_count(), 6);
    assert_eq!(checklist.required_percentage(), 50.0);
}

#[test]
fn history_search_scenarios() {
    let history = seed::history();

    let brakes = HistoryFilter {
        search: "freio".into(),
        status: StatusFilter::All,
    };
    let found = filter_history(&history, &brakes);
    assert_eq!(found.len(), 1);
    assert!(found[0].services.iter().any(|s| s == "Pastilhas de freio"));

    let nothing = HistoryFilter {
        search: "xyz".into(),
        status: StatusFilter::All,
    };
    assert!(filter_history(&history, &nothing).is_empty());

    let cancelled = HistoryFilter {
        search: String::new(),
        status: StatusFilter::Cancelled,
    };
    let found = filter_history(&history, &cancelled);
    let expected = history
        .iter()
        .filter(|e| e.status == HistoryStatus::Cancelled)
        .count();
    assert_eq!(found.len(), expected);
    assert!(found.iter().all(|e| e.status == HistoryStatus::Cancelled));
}

#[test]
fn history_filter_is_idempotent() {
    let history = seed::history();
    let filter = HistoryFilter {
        search: "troca".into(),
        status: StatusFilter::Completed,
    };
    let once: Vec<_> = filter_history(&history, &filter).into_iter().cloned().collect();
    let twice: Vec<_> = filter_history(&once, &filter).into_iter().cloned().collect();
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
}

#[test]
fn history_summary_ignores_active_filter() {
    let history = seed::history();
    let summary = HistorySummary::from_entries(&history);
    assert_eq!(summary.completed_count, 4);
    assert_eq!(summary.total_spent, Decimal::from(1600));
}

#[test]
fn plate_formatter_is_idempotent() {
    assert_eq!(format_plate("ABC-1234"), "ABC-1234");
    assert_eq!(format_plate(&format_plate("abc 1234")), "ABC-1234");
}

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use fincast_core::{
    api_budget_progress, api_forecast_rolling, api_summarize, ForecastConfig,
};
use fincast_domain::{Budget, Category, DateRange, Transaction, TransactionKind};
use fincast_storage_mem::MemoryLedger;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn settled(
    user: Uuid,
    category: Uuid,
    amount: Decimal,
    kind: TransactionKind,
    on: NaiveDate,
) -> Transaction {
    let mut txn = Transaction::new(user, category, amount, kind, on);
    txn.mark_completed();
    txn
}

#[test]
fn month_end_review_flow() {
    // One user's month: salary in, groceries and rent out, one invoice still
    // outstanding, a grocery budget to track, then a quarter of projection.
    let user = Uuid::new_v4();
    let reference = sample_date(2025, 6, 30);

    let mut ledger = MemoryLedger::new();
    let groceries = ledger.insert_category(Category::new("Groceries"));
    let housing = ledger.insert_category(Category::new("Housing"));

    ledger.insert_transaction(
        settled(user, housing, dec!(3000), TransactionKind::Income, sample_date(2025, 6, 1))
            .with_client("Acme Corp")
            .with_note("June salary"),
    );
    ledger.insert_transaction(settled(
        user,
        housing,
        dec!(1200),
        TransactionKind::Expense,
        sample_date(2025, 6, 3),
    ));
    ledger.insert_transaction(settled(
        user,
        groceries,
        dec!(340),
        TransactionKind::Expense,
        sample_date(2025, 6, 14),
    ));
    ledger.insert_transaction(Transaction::new(
        user,
        housing,
        dec!(450),
        TransactionKind::Income,
        sample_date(2025, 6, 25),
    ));

    let window = DateRange::trailing_days(reference, 30);
    let summary = api_summarize(&ledger, user, window).unwrap();
    assert_eq!(summary.completed.total_income, dec!(3000));
    assert_eq!(summary.completed.total_expense, dec!(1540));
    assert_eq!(summary.completed.net_amount, dec!(1460));
    assert_eq!(summary.pending.total_income, dec!(450));
    assert!(summary.burn_rate > Decimal::ZERO);

    let budget_id = ledger.insert_budget(Budget::new(
        user,
        groceries,
        dec!(400),
        sample_date(2025, 6, 1),
        sample_date(2025, 6, 30),
    ));
    let progress = api_budget_progress(&ledger, user, budget_id).unwrap();
    assert_eq!(progress.amount_spent, dec!(340));
    assert_eq!(progress.amount_remaining, dec!(60));
    assert_eq!(progress.percentage_used, dec!(85));

    let periods =
        api_forecast_rolling(&ledger, user, reference, ForecastConfig::default()).unwrap();
    assert_eq!(periods.len(), 13);
    // Opening balance reflects completed history only. The outstanding
    // invoice is dated before the horizon starts, so it never enters the
    // projection either: overdue receivables are not forecast cash.
    assert_eq!(periods[0].opening_balance, dec!(1460));
    assert_eq!(periods[0].cash_in, Decimal::ZERO);
    for pair in periods.windows(2) {
        assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
    }

    assert_eq!(ledger.category(groceries).map(|c| c.name.as_str()), Some("Groceries"));
}

#[test]
fn users_are_fully_isolated() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let category = Uuid::new_v4();
    let reference = sample_date(2025, 6, 30);

    let mut ledger = MemoryLedger::new();
    ledger.insert_transaction(settled(
        alice,
        category,
        dec!(500),
        TransactionKind::Income,
        sample_date(2025, 6, 10),
    ));
    ledger.insert_transaction(settled(
        bob,
        category,
        dec!(80),
        TransactionKind::Expense,
        sample_date(2025, 6, 12),
    ));

    let window = DateRange::trailing_days(reference, 30);
    let alice_summary = api_summarize(&ledger, alice, window).unwrap();
    assert_eq!(alice_summary.completed.total_income, dec!(500));
    assert_eq!(alice_summary.completed.total_expense, Decimal::ZERO);

    let bob_periods =
        api_forecast_rolling(&ledger, bob, reference, ForecastConfig::default()).unwrap();
    assert_eq!(bob_periods[0].opening_balance, dec!(-80));
}

#[test]
fn snapshot_construction_from_collected_rows() {
    let user = Uuid::new_v4();
    let category = Uuid::new_v4();
    let budget = Budget::new(
        user,
        category,
        dec!(250),
        sample_date(2025, 7, 1),
        sample_date(2025, 7, 31),
    );
    let budget_id = budget.id;
    let rows = vec![settled(
        user,
        category,
        dec!(100),
        TransactionKind::Expense,
        sample_date(2025, 7, 4),
    )];

    let ledger = MemoryLedger::with_rows(rows, vec![budget]);
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.budgets().len(), 1);

    let progress = api_budget_progress(&ledger, user, budget_id).unwrap();
    assert_eq!(progress.amount_spent, dec!(100));
    assert_eq!(progress.percentage_used, dec!(40));
}

//! Database seeder for Calyx Books development and testing.
//!
//! Seeds a small chart of accounts, a posted bill with its payment, and a
//! bank statement that exercises every matching tier, then runs one
//! auto-match pass so a fresh environment has data in every state.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use calyx_core::account::{AccountSubtype, AccountType};
use calyx_core::ledger::{DocumentKind, DocumentRef};
use calyx_core::reconciliation::ReconciliationState;
use calyx_db::entities::{bank_transactions, payments, sea_orm_active_enums};
use calyx_db::repositories::{
    transaction_state, AccountRepository, BillLineInput, CreateAccountInput, PaymentLineInput,
    PostingRepository, ReconciliationRepository,
};
use calyx_shared::AppConfig;

/// Demo bill ID (consistent for all seeds)
const DEMO_BILL_ID: &str = "00000000-0000-0000-0000-000000000101";
/// Demo payment ID (consistent for all seeds)
const DEMO_PAYMENT_ID: &str = "00000000-0000-0000-0000-000000000102";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    println!("Connecting to database...");
    let db = calyx_db::connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding chart of accounts...");
    let expense = seed_account(
        &db,
        "6100",
        "Office Supplies",
        AccountType::Expense,
        Some(AccountSubtype::OperatingExpense),
    )
    .await;
    let payable = seed_account(
        &db,
        "2100",
        "Accounts Payable",
        AccountType::Liability,
        Some(AccountSubtype::AccountsPayable),
    )
    .await;
    let bank = seed_account(
        &db,
        "1200",
        "Business Checking",
        AccountType::Asset,
        Some(AccountSubtype::Bank),
    )
    .await;

    println!("Seeding demo bill posting...");
    seed_bill_posting(&db, expense, payable).await;

    println!("Seeding demo payment...");
    seed_payment(&db, payable, bank).await;

    println!("Seeding bank statement...");
    seed_bank_statement(&db, bank).await;

    println!("Running auto-match...");
    let repo = ReconciliationRepository::new(db);
    let matched = repo
        .auto_match_account(bank, config.reconciliation.match_window_days)
        .await
        .expect("Failed to auto-match");
    println!("Auto-matched {matched} bank transactions");

    let awaiting = repo
        .unreconciled_bank_transactions(bank)
        .await
        .expect("Failed to list bank transactions")
        .iter()
        .filter(|row| transaction_state(row) == ReconciliationState::Matched)
        .count();
    println!("{awaiting} bank transactions awaiting confirmation");

    println!("Seeding complete!");
}

fn demo_bill_id() -> Uuid {
    Uuid::parse_str(DEMO_BILL_ID).unwrap()
}

fn demo_payment_id() -> Uuid {
    Uuid::parse_str(DEMO_PAYMENT_ID).unwrap()
}

fn bill_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
}

/// Seeds one account, returning its ID. Reuses an existing row by code.
async fn seed_account(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    account_type: AccountType,
    account_subtype: Option<AccountSubtype>,
) -> Uuid {
    let repo = AccountRepository::new(db.clone());

    let existing = repo
        .list_accounts(Default::default())
        .await
        .expect("Failed to list accounts")
        .into_iter()
        .find(|a| a.code == code);

    if let Some(account) = existing {
        return account.id;
    }

    let account = repo
        .create_account(CreateAccountInput {
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            account_type,
            account_subtype,
            parent_id: None,
            is_active: true,
            opened_on: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        })
        .await
        .expect("Failed to create account");
    account.id
}

/// Seeds the journal and memo transaction for the demo bill.
async fn seed_bill_posting(db: &DatabaseConnection, expense: Uuid, payable: Uuid) {
    let repo = PostingRepository::new(db.clone());

    let existing = repo
        .journals_for_document(DocumentRef::new(DocumentKind::Bill, demo_bill_id()))
        .await
        .expect("Failed to query journals");
    if !existing.is_empty() {
        return;
    }

    repo.post_bill_line(
        demo_bill_id(),
        &BillLineInput {
            expense_account: expense,
            liability_account: payable,
            amount: dec!(420.00),
            date: bill_date(),
            memo: "Printer paper and toner".to_string(),
        },
    )
    .await
    .expect("Failed to post bill line");
}

/// Seeds the payment row and its posting for the demo bill.
async fn seed_payment(db: &DatabaseConnection, payable: Uuid, bank: Uuid) {
    if payments::Entity::find_by_id(demo_payment_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        return;
    }

    let payment_date = NaiveDate::from_ymd_opt(2026, 2, 17).unwrap();
    let payment = payments::ActiveModel {
        id: Set(demo_payment_id()),
        amount: Set(dec!(420.00)),
        payment_date: Set(payment_date),
        bank_account_id: Set(bank),
        document_kind: Set(sea_orm_active_enums::DocumentKind::Bill),
        document_id: Set(demo_bill_id()),
        reconciled: Set(false),
        reconciled_date: Set(None),
        created_at: Set(Utc::now().into()),
    };
    payment
        .insert(db)
        .await
        .expect("Failed to insert demo payment");

    let repo = PostingRepository::new(db.clone());
    repo.post_payment_line(
        demo_payment_id(),
        &PaymentLineInput {
            liability_account: payable,
            bank_account: bank,
            amount: dec!(420.00),
            date: payment_date,
            memo: "Payment for bill 2026-0101".to_string(),
        },
    )
    .await
    .expect("Failed to post payment line");
}

/// Seeds three statement lines: one exact match, one window match, one miss.
async fn seed_bank_statement(db: &DatabaseConnection, bank: Uuid) {
    let existing = bank_transactions::Entity::find()
        .filter(bank_transactions::Column::BankAccountId.eq(bank))
        .one(db)
        .await
        .expect("Failed to query bank transactions");
    if existing.is_some() {
        return;
    }

    let rows = [
        // Same amount and date as the demo payment: exact tier.
        (
            dec!(420.00),
            NaiveDate::from_ymd_opt(2026, 2, 17).unwrap(),
            sea_orm_active_enums::BankTransactionKind::Withdrawal,
        ),
        // Same amount, three days later: high tier. Also demonstrates that
        // the candidate pool is not consumed across a batch scan.
        (
            dec!(420.00),
            NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
            sea_orm_active_enums::BankTransactionKind::Withdrawal,
        ),
        // A fee with no recorded payment: stays unmatched.
        (
            dec!(12.50),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
            sea_orm_active_enums::BankTransactionKind::Fee,
        ),
    ];

    for (amount, date, kind) in rows {
        let row = bank_transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            bank_account_id: Set(bank),
            transaction_date: Set(date),
            kind: Set(kind),
            amount: Set(amount),
            reconciled: Set(false),
            payment_id: Set(None),
            matched_amount: Set(None),
            match_confidence: Set(None),
            reconciled_by: Set(None),
            reconciled_at: Set(None),
            created_at: Set(Utc::now().into()),
        };
        row.insert(db)
            .await
            .expect("Failed to insert bank transaction");
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use chrono::NaiveDate;
use nivesh::cli::build_cli;
use nivesh::commands::Session;
use nivesh::commands::importer::{handle, read_csv};
use nivesh::i18n::Language;
use nivesh::models::{ExpenseCategory, IncomeSource};
use nivesh::{Ledger, RecordStore};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn session() -> Session {
    Session::new("u1", Language::En, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
}

fn csv_file(body: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(body.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn reads_expense_rows() {
    let f = csv_file(
        "date,amount,category,description\n\
         2025-03-01, 450 ,Food,Groceries\n\
         2025-03-03,\"1,200.50\",transport,Metro card\n",
    );
    let path = f.path().to_str().unwrap();
    let rows = read_csv::<ExpenseCategory>(path, &session(), "expense", 0).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].amount, d("450"));
    assert_eq!(rows[0].category, ExpenseCategory::Food);
    assert_eq!(rows[0].description, "Groceries");
    assert_eq!(rows[0].owner_id, "u1");
    assert_eq!(rows[1].amount, d("1200.50"));
    assert_eq!(rows[1].date, "2025-03-03");
    assert_ne!(rows[0].id, rows[1].id);
}

#[test]
fn income_files_use_a_source_column_in_any_order() {
    let f = csv_file("Source,Amount,Date\nsalary,52000,2025-03-01\nbonus,5000,2025-03-15\n");
    let path = f.path().to_str().unwrap();
    let rows = read_csv::<IncomeSource>(path, &session(), "income", 0).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, IncomeSource::Salary);
    assert_eq!(rows[1].category, IncomeSource::Bonus);
    assert_eq!(rows[1].description, "");
}

#[test]
fn bad_row_names_its_line() {
    let f = csv_file(
        "date,amount,category\n\
         2025-03-01,450,food\n\
         2025-03-02,0,food\n",
    );
    let path = f.path().to_str().unwrap();
    let err = read_csv::<ExpenseCategory>(path, &session(), "expense", 0).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Line 3"), "{}", msg);
}

#[test]
fn unknown_category_is_rejected() {
    let f = csv_file("date,amount,category\n2025-03-01,450,pets\n");
    let path = f.path().to_str().unwrap();
    let err = read_csv::<ExpenseCategory>(path, &session(), "expense", 0).unwrap_err();
    assert!(format!("{:#}", err).contains("pets"));
}

#[test]
fn missing_column_is_reported() {
    let f = csv_file("when,amount,category\n2025-03-01,450,food\n");
    let path = f.path().to_str().unwrap();
    let err = read_csv::<ExpenseCategory>(path, &session(), "expense", 0).unwrap_err();
    assert!(err.to_string().contains("date"));
}

#[test]
fn import_command_fills_the_ledger() {
    let f = csv_file(
        "date,amount,category,note\n\
         2025-03-01,450,food,Groceries\n\
         2025-03-04,300,utilities,Electricity\n",
    );
    let path = f.path().to_str().unwrap();
    let matches = build_cli().get_matches_from(["nivesh", "import", "expenses", "--path", path]);
    let import = matches.subcommand_matches("import").unwrap();

    let mut ledger = Ledger::default();
    handle(&mut ledger, &session(), import).unwrap();
    let stored = ledger.list_expenses("u1").unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].description, "Electricity");
}

#[test]
fn failed_import_stores_nothing() {
    let f = csv_file("date,amount,source\n2025-03-01,52000,salary\nsoon,10,bonus\n");
    let path = f.path().to_str().unwrap();
    let matches = build_cli().get_matches_from(["nivesh", "import", "income", "--path", path]);
    let import = matches.subcommand_matches("import").unwrap();

    let mut ledger = Ledger::default();
    assert!(handle(&mut ledger, &session(), import).is_err());
    assert!(ledger.income.is_empty());
}

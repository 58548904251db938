mod common;

use common::*;
use salesdesk_core::{
    handlers::handle_report, rows_to_text, Report, SalesError, Store, Subject,
};

fn report_text(store: &Store, report: Report, subject_id: Option<i64>) -> String {
    let rows = store
        .run_report(report, subject_id)
        .expect("Failed to run report");
    rows_to_text(&rows, None)
}

#[test]
fn test_all_sales_lists_every_sale_in_id_order() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    let text = report_text(&store, Report::AllSales, None);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        format!(
            "(1, 2026-02-15, 1200.50, {}, Ivanov, {}, Acme, None)",
            f.ivanov, f.acme
        )
    );
    assert_eq!(
        lines[4],
        format!(
            "(5, 2026-03-03, 0.01, {}, Petrenko, {}, Globex, None)",
            f.petrenko, f.globex
        )
    );
}

#[test]
fn test_sales_by_salesman() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    let text = report_text(&store, Report::SalesBySalesman, Some(f.ivanov));

    assert_eq!(
        text,
        "(1, 2026-02-15, 1200.50, Ivanov, Acme, None)\n(2, 2026-02-16, 300.00, Ivanov, Globex, None)"
    );
}

#[test]
fn test_sales_by_idle_salesman_is_empty() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    let text = report_text(&store, Report::SalesBySalesman, Some(f.idle_salesman));

    assert_eq!(text, "No data.");
}

#[test]
fn test_largest_and_smallest_sale() {
    let (_temp_dir, store) = create_test_store();
    seed(&store);

    assert_eq!(
        report_text(&store, Report::MaxSale, None),
        "(4, 2026-03-02, 5000.00, Petrenko, Globex)"
    );
    assert_eq!(
        report_text(&store, Report::MinSale, None),
        "(5, 2026-03-03, 0.01, Petrenko, Globex)"
    );
}

#[test]
fn test_extreme_sales_for_salesman() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    assert_eq!(
        report_text(&store, Report::MaxSaleForSalesman, Some(f.ivanov)),
        "(1, 2026-02-15, 1200.50, Ivanov, Acme)"
    );
    assert_eq!(
        report_text(&store, Report::MinSaleForSalesman, Some(f.ivanov)),
        "(2, 2026-02-16, 300.00, Ivanov, Globex)"
    );
    assert_eq!(
        report_text(&store, Report::MaxSaleForSalesman, Some(f.idle_salesman)),
        "No data."
    );
}

#[test]
fn test_extreme_sales_for_customer() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    assert_eq!(
        report_text(&store, Report::MaxSaleForCustomer, Some(f.acme)),
        "(1, 2026-02-15, 1200.50, Ivanov, Acme)"
    );
    assert_eq!(
        report_text(&store, Report::MinSaleForCustomer, Some(f.acme)),
        "(3, 2026-03-01, 99.99, Petrenko, Acme)"
    );
    assert_eq!(
        report_text(&store, Report::MinSaleForCustomer, Some(f.idle_customer)),
        "No data."
    );
}

#[test]
fn test_equal_amounts_pick_lowest_id() {
    let (_temp_dir, store) = create_test_store();
    let salesman = add_salesman(&store, "Ivanov");
    let customer = add_customer(&store, "Acme");
    let first = add_sale(&store, salesman, customer, "10", "2026-01-01");
    add_sale(&store, salesman, customer, "10", "2026-01-02");

    let max = store.run_report(Report::MaxSale, None).expect("Failed to run");
    let min = store.run_report(Report::MinSale, None).expect("Failed to run");

    assert_eq!(max[0][0].as_int(), Some(first));
    assert_eq!(min[0][0].as_int(), Some(first));
}

#[test]
fn test_salesman_totals_count_idle_salesmen_as_zero() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    assert_eq!(
        report_text(&store, Report::SalesmanWithMaxTotal, None),
        format!("({}, Petrenko, 5100.00)", f.petrenko)
    );
    assert_eq!(
        report_text(&store, Report::SalesmanWithMinTotal, None),
        format!("({}, Idle, 0.00)", f.idle_salesman)
    );
}

#[test]
fn test_total_rows_carry_name_and_amount() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    let rows = store
        .run_report(Report::SalesmanWithMaxTotal, None)
        .expect("Failed to run report");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0].as_int(), Some(f.petrenko));
    assert_eq!(rows[0][1].as_text(), Some("Petrenko"));
    assert_eq!(rows[0][2].as_money(), Some(amount("5100.00")));
}

#[test]
fn test_customer_with_largest_total() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    assert_eq!(
        report_text(&store, Report::CustomerWithMaxTotal, None),
        format!("({}, Globex, 5300.01)", f.globex)
    );
}

#[test]
fn test_totals_on_empty_store_are_no_data() {
    let (_temp_dir, store) = create_test_store();

    assert_eq!(report_text(&store, Report::SalesmanWithMaxTotal, None), "No data.");
    assert_eq!(report_text(&store, Report::CustomerWithMaxTotal, None), "No data.");
    assert_eq!(report_text(&store, Report::MaxSale, None), "No data.");
}

#[test]
fn test_averages_round_to_cents() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    assert_eq!(
        report_text(&store, Report::AverageForSalesman, Some(f.ivanov)),
        format!("({}, Ivanov, 750.25)", f.ivanov)
    );
    assert_eq!(
        report_text(&store, Report::AverageForSalesman, Some(f.petrenko)),
        format!("({}, Petrenko, 1700.00)", f.petrenko)
    );
    // 650.245 rounds half away from zero.
    assert_eq!(
        report_text(&store, Report::AverageForCustomer, Some(f.acme)),
        format!("({}, Acme, 650.25)", f.acme)
    );
    assert_eq!(
        report_text(&store, Report::AverageForCustomer, Some(f.globex)),
        format!("({}, Globex, 1766.67)", f.globex)
    );
}

#[test]
fn test_averages_without_sales_are_no_data() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    assert_eq!(
        report_text(&store, Report::AverageForSalesman, Some(f.idle_salesman)),
        "No data."
    );
    assert_eq!(
        report_text(&store, Report::AverageForCustomer, Some(f.idle_customer)),
        "No data."
    );
    assert_eq!(
        report_text(&store, Report::AverageForCustomer, Some(9_999)),
        "No data."
    );
}

#[test]
fn test_single_row_reports_never_return_more_than_one_row() {
    let (_temp_dir, store) = create_test_store();
    let f = seed(&store);

    for report in Report::ALL.iter().filter(|r| r.single_row()) {
        let subject_id = report.subject().map(|subject| match subject {
            Subject::Salesman => f.petrenko,
            Subject::Customer => f.globex,
        });
        let rows = store
            .run_report(*report, subject_id)
            .expect("Failed to run report");
        assert!(rows.len() <= 1, "{report:?} returned {} rows", rows.len());
    }
}

#[test]
fn test_parameterized_report_without_id_is_rejected() {
    let (_temp_dir, store) = create_test_store();

    let err = store
        .run_report(Report::SalesBySalesman, None)
        .expect_err("Identifier is required");

    assert!(matches!(err, SalesError::InvalidInput { .. }));
}

#[test]
fn test_report_handler_prompts_for_subject_and_prints_title() {
    let (_temp_dir, mut session) = create_test_session(["abc", "1", "n"]);
    seed(&session.store);

    let text = handle_report(&mut session, Report::AverageForSalesman)
        .expect("Failed to run report");

    let title = "Average sale of salesman ID=1";
    assert_eq!(
        text,
        format!("{title}\n{}\n(1, Ivanov, 750.25)", "-".repeat(title.len()))
    );
    let output = session.into_console().output().to_string();
    assert!(output.contains("Salesman ID: abc\nEnter a whole-number ID.\nSalesman ID: 1\n"));
    assert!(output.contains("Save result to file? (y/n): n\n"));
}

#[test]
fn test_report_handler_saves_on_request() {
    let (temp_dir, mut session) = create_test_session(["y"]);
    seed(&session.store);

    let text = handle_report(&mut session, Report::MaxSale).expect("Failed to run report");

    let saved = std::fs::read_to_string(temp_dir.path().join("exports/report.txt"))
        .expect("Failed to read export");
    assert_eq!(saved, text);
    assert!(saved.starts_with("Largest sale\n------------\n"));
    assert!(session.into_console().output().contains("Result saved to "));
}

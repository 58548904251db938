//! Catalogue of canned analytical reports.
//!
//! Every report is a fixed SQL template with at most one bound identifier.
//! Reports marked [`Report::single_row`] return at most one row (the first
//! row of an ordered query); the others return every row.

use std::fmt;

use crate::models::Column;

/// The entity a report parameter identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Salesman,
    Customer,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Salesman => "salesman",
            Subject::Customer => "customer",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    AllSales,
    SalesBySalesman,
    MaxSale,
    MinSale,
    MaxSaleForSalesman,
    MinSaleForSalesman,
    MaxSaleForCustomer,
    MinSaleForCustomer,
    SalesmanWithMaxTotal,
    SalesmanWithMinTotal,
    CustomerWithMaxTotal,
    AverageForCustomer,
    AverageForSalesman,
}

const SALE_DETAIL_COLUMNS: [Column; 5] = [
    Column::Id,
    Column::Date,
    Column::Money,
    Column::Text,
    Column::Text,
];

const TOTAL_COLUMNS: [Column; 3] = [Column::Id, Column::Text, Column::Money];

const ALL_SALES_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount,
           sm.id, sm.full_name,
           c.id, c.full_name,
           s.note
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    ORDER BY s.id;";

const SALES_BY_SALESMAN_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount,
           sm.full_name, c.full_name, s.note
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    WHERE s.salesman_id = ?1
    ORDER BY s.id;";

const MAX_SALE_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount, sm.full_name, c.full_name
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    ORDER BY s.amount DESC, s.id
    LIMIT 1;";

const MIN_SALE_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount, sm.full_name, c.full_name
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    ORDER BY s.amount ASC, s.id
    LIMIT 1;";

const MAX_SALE_FOR_SALESMAN_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount, sm.full_name, c.full_name
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    WHERE s.salesman_id = ?1
    ORDER BY s.amount DESC, s.id
    LIMIT 1;";

const MIN_SALE_FOR_SALESMAN_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount, sm.full_name, c.full_name
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    WHERE s.salesman_id = ?1
    ORDER BY s.amount ASC, s.id
    LIMIT 1;";

const MAX_SALE_FOR_CUSTOMER_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount, sm.full_name, c.full_name
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    WHERE s.customer_id = ?1
    ORDER BY s.amount DESC, s.id
    LIMIT 1;";

const MIN_SALE_FOR_CUSTOMER_SQL: &str = "
    SELECT s.id, s.sale_date, s.amount, sm.full_name, c.full_name
    FROM sales s
    JOIN salesmen sm ON sm.id = s.salesman_id
    JOIN customers c ON c.id = s.customer_id
    WHERE s.customer_id = ?1
    ORDER BY s.amount ASC, s.id
    LIMIT 1;";

const SALESMAN_MAX_TOTAL_SQL: &str = "
    SELECT sm.id, sm.full_name, COALESCE(SUM(s.amount), 0) AS total_sales
    FROM salesmen sm
    LEFT JOIN sales s ON s.salesman_id = sm.id
    GROUP BY sm.id, sm.full_name
    ORDER BY total_sales DESC, sm.id
    LIMIT 1;";

const SALESMAN_MIN_TOTAL_SQL: &str = "
    SELECT sm.id, sm.full_name, COALESCE(SUM(s.amount), 0) AS total_sales
    FROM salesmen sm
    LEFT JOIN sales s ON s.salesman_id = sm.id
    GROUP BY sm.id, sm.full_name
    ORDER BY total_sales ASC, sm.id
    LIMIT 1;";

const CUSTOMER_MAX_TOTAL_SQL: &str = "
    SELECT c.id, c.full_name, COALESCE(SUM(s.amount), 0) AS total_purchases
    FROM customers c
    LEFT JOIN sales s ON s.customer_id = c.id
    GROUP BY c.id, c.full_name
    ORDER BY total_purchases DESC, c.id
    LIMIT 1;";

// Inner joins: an entity without sales yields no row rather than an average
// of nothing.
const CUSTOMER_AVERAGE_SQL: &str = "
    SELECT c.id, c.full_name, CAST(ROUND(AVG(s.amount)) AS INTEGER) AS avg_purchase
    FROM customers c
    JOIN sales s ON s.customer_id = c.id
    WHERE c.id = ?1
    GROUP BY c.id, c.full_name;";

const SALESMAN_AVERAGE_SQL: &str = "
    SELECT sm.id, sm.full_name, CAST(ROUND(AVG(s.amount)) AS INTEGER) AS avg_sale
    FROM salesmen sm
    JOIN sales s ON s.salesman_id = sm.id
    WHERE sm.id = ?1
    GROUP BY sm.id, sm.full_name;";

impl Report {
    /// Every report in menu order.
    pub const ALL: [Report; 13] = [
        Report::AllSales,
        Report::SalesBySalesman,
        Report::MaxSale,
        Report::MinSale,
        Report::MaxSaleForSalesman,
        Report::MinSaleForSalesman,
        Report::MaxSaleForCustomer,
        Report::MinSaleForCustomer,
        Report::SalesmanWithMaxTotal,
        Report::SalesmanWithMinTotal,
        Report::CustomerWithMaxTotal,
        Report::AverageForCustomer,
        Report::AverageForSalesman,
    ];

    /// Label shown in the reports menu.
    pub fn label(&self) -> &'static str {
        match self {
            Report::AllSales => "All sales",
            Report::SalesBySalesman => "Sales of a given salesman",
            Report::MaxSale => "Largest sale",
            Report::MinSale => "Smallest sale",
            Report::MaxSaleForSalesman => "Largest sale of a given salesman",
            Report::MinSaleForSalesman => "Smallest sale of a given salesman",
            Report::MaxSaleForCustomer => "Largest sale to a given customer",
            Report::MinSaleForCustomer => "Smallest sale to a given customer",
            Report::SalesmanWithMaxTotal => "Salesman with the largest sales total",
            Report::SalesmanWithMinTotal => "Salesman with the smallest sales total",
            Report::CustomerWithMaxTotal => "Customer with the largest purchase total",
            Report::AverageForCustomer => "Average purchase of a given customer",
            Report::AverageForSalesman => "Average sale of a given salesman",
        }
    }

    /// Entity whose identifier the report is parameterized by, if any.
    pub fn subject(&self) -> Option<Subject> {
        match self {
            Report::SalesBySalesman
            | Report::MaxSaleForSalesman
            | Report::MinSaleForSalesman
            | Report::AverageForSalesman => Some(Subject::Salesman),
            Report::MaxSaleForCustomer
            | Report::MinSaleForCustomer
            | Report::AverageForCustomer => Some(Subject::Customer),
            _ => None,
        }
    }

    /// Whether only the first result row is reported.
    pub fn single_row(&self) -> bool {
        !matches!(self, Report::AllSales | Report::SalesBySalesman)
    }

    /// Header printed above the result rows.
    pub fn title(&self, subject_id: Option<i64>) -> String {
        let base = match self {
            Report::AllSales => "All sales",
            Report::SalesBySalesman => "Sales of salesman",
            Report::MaxSale => "Largest sale",
            Report::MinSale => "Smallest sale",
            Report::MaxSaleForSalesman => "Largest sale of salesman",
            Report::MinSaleForSalesman => "Smallest sale of salesman",
            Report::MaxSaleForCustomer => "Largest sale to customer",
            Report::MinSaleForCustomer => "Smallest sale to customer",
            Report::SalesmanWithMaxTotal => "Salesman with the largest sales total",
            Report::SalesmanWithMinTotal => "Salesman with the smallest sales total",
            Report::CustomerWithMaxTotal => "Customer with the largest purchase total",
            Report::AverageForCustomer => "Average purchase of customer",
            Report::AverageForSalesman => "Average sale of salesman",
        };
        match subject_id {
            Some(id) => format!("{base} ID={id}"),
            None => base.to_string(),
        }
    }

    pub(crate) fn sql(&self) -> &'static str {
        match self {
            Report::AllSales => ALL_SALES_SQL,
            Report::SalesBySalesman => SALES_BY_SALESMAN_SQL,
            Report::MaxSale => MAX_SALE_SQL,
            Report::MinSale => MIN_SALE_SQL,
            Report::MaxSaleForSalesman => MAX_SALE_FOR_SALESMAN_SQL,
            Report::MinSaleForSalesman => MIN_SALE_FOR_SALESMAN_SQL,
            Report::MaxSaleForCustomer => MAX_SALE_FOR_CUSTOMER_SQL,
            Report::MinSaleForCustomer => MIN_SALE_FOR_CUSTOMER_SQL,
            Report::SalesmanWithMaxTotal => SALESMAN_MAX_TOTAL_SQL,
            Report::SalesmanWithMinTotal => SALESMAN_MIN_TOTAL_SQL,
            Report::CustomerWithMaxTotal => CUSTOMER_MAX_TOTAL_SQL,
            Report::AverageForCustomer => CUSTOMER_AVERAGE_SQL,
            Report::AverageForSalesman => SALESMAN_AVERAGE_SQL,
        }
    }

    pub(crate) fn columns(&self) -> &'static [Column] {
        const ALL_SALES_COLUMNS: [Column; 8] = [
            Column::Id,
            Column::Date,
            Column::Money,
            Column::Id,
            Column::Text,
            Column::Id,
            Column::Text,
            Column::Text,
        ];
        const SALES_BY_SALESMAN_COLUMNS: [Column; 6] = [
            Column::Id,
            Column::Date,
            Column::Money,
            Column::Text,
            Column::Text,
            Column::Text,
        ];

        match self {
            Report::AllSales => &ALL_SALES_COLUMNS,
            Report::SalesBySalesman => &SALES_BY_SALESMAN_COLUMNS,
            Report::MaxSale
            | Report::MinSale
            | Report::MaxSaleForSalesman
            | Report::MinSaleForSalesman
            | Report::MaxSaleForCustomer
            | Report::MinSaleForCustomer => &SALE_DETAIL_COLUMNS,
            Report::SalesmanWithMaxTotal
            | Report::SalesmanWithMinTotal
            | Report::CustomerWithMaxTotal
            | Report::AverageForCustomer
            | Report::AverageForSalesman => &TOTAL_COLUMNS,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_reports_bind_one_placeholder() {
        for report in Report::ALL {
            let bound = report.sql().contains("?1");
            assert_eq!(bound, report.subject().is_some(), "{report:?}");
        }
    }

    #[test]
    fn test_title_includes_subject_id() {
        assert_eq!(
            Report::SalesBySalesman.title(Some(4)),
            "Sales of salesman ID=4"
        );
        assert_eq!(Report::AllSales.title(None), "All sales");
    }

    #[test]
    fn test_list_reports_are_multi_row() {
        let multi: Vec<_> = Report::ALL.iter().filter(|r| !r.single_row()).collect();
        assert_eq!(multi, [&Report::AllSales, &Report::SalesBySalesman]);
    }
}

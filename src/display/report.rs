//! Report formatting for terminal output

use crate::config::Settings;
use crate::models::Money;
use crate::reports::{BudgetReport, BudgetStatus, CategoryBreakdown, MonthlyReport};

const BAR_WIDTH: usize = 20;
const REPORT_WIDTH: usize = 50;

/// Format the spending-by-category report
pub fn format_category_breakdown(report: &CategoryBreakdown, settings: &Settings) -> String {
    if report.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let max = report
        .rows
        .iter()
        .map(|r| r.total.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    output.push_str(&format_header("Spending by Category", REPORT_WIDTH));
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for row in &report.rows {
        output.push_str(&format!(
            "{:<15} {:>12} {:>5} {}\n",
            row.category.name(),
            row.total.format_with_symbol(symbol),
            format_percentage(row.percentage),
            format_bar(row.total.cents() as f64, max, BAR_WIDTH)
        ));
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<15} {:>12}\n",
        "Total",
        report.total.format_with_symbol(symbol)
    ));
    output
}

/// Format the spending-by-month report
pub fn format_monthly_report(report: &MonthlyReport, settings: &Settings) -> String {
    if report.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str(&format_header("Monthly Report", REPORT_WIDTH));
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for month in &report.months {
        output.push_str(&format!(
            "{:<10} {:>14}   {} expense{}\n",
            month.month,
            month.total.format_with_symbol(symbol),
            month.count,
            if month.count == 1 { "" } else { "s" }
        ));
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<10} {:>14}\n",
        "Total",
        report.total.format_with_symbol(symbol)
    ));
    output
}

/// Format a budget check
pub fn format_budget_report(report: &BudgetReport, settings: &Settings) -> String {
    let fmt = |m: Money| m.format_with_symbol(&settings.currency_symbol);

    let Some(limit) = report.limit else {
        return format!(
            "No budget set. Spent so far: {}\nUse 'expense budget set <amount>' to set one.\n",
            fmt(report.spent)
        );
    };

    let mut output = String::new();
    if let Some(month) = &report.month {
        output.push_str(&format!("Month:     {}\n", month));
    }
    output.push_str(&format!("Budget:    {}\n", fmt(limit)));
    output.push_str(&format!(
        "Spent:     {} ({})\n",
        fmt(report.spent),
        format_percentage(report.percent_used().unwrap_or(0.0))
    ));

    match report.status {
        BudgetStatus::Exceeded { overage } => {
            output.push_str(&format!("Over by:   {}\n", fmt(overage)));
            output.push_str("WARNING: You have exceeded your budget!\n");
        }
        BudgetStatus::NearLimit { remaining } => {
            output.push_str(&format!("Remaining: {}\n", fmt(remaining)));
            output.push_str("Warning: You are close to your budget limit.\n");
        }
        BudgetStatus::Ok { remaining } => {
            output.push_str(&format!("Remaining: {}\n", fmt(remaining)));
            output.push_str("You are within your budget.\n");
        }
        BudgetStatus::Unset => {}
    }

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center a title in a line of given width
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, Expense};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: Category, month: u32) -> Expense {
        let date = NaiveDate::from_ymd_opt(2025, month, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Expense::with_date("x", Money::from_cents(cents), category, date)
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_category_breakdown_output() {
        let expenses = vec![
            expense(3000, Category::Shopping, 1),
            expense(1000, Category::Food, 1),
        ];
        let output = format_category_breakdown(&CategoryBreakdown::generate(&expenses), &Settings::default());

        let food = output.find("Food").unwrap();
        let shopping = output.find("Shopping").unwrap();
        assert!(food < shopping);
        assert!(output.contains("75%"));
        assert!(output.contains("$40.00"));
        assert!(!output.contains("Healthcare"));
    }

    #[test]
    fn test_monthly_output() {
        let expenses = vec![expense(500, Category::Food, 2), expense(700, Category::Food, 1)];
        let output = format_monthly_report(&MonthlyReport::generate(&expenses), &Settings::default());

        assert!(output.find("2025-01").unwrap() < output.find("2025-02").unwrap());
        assert!(output.contains("$12.00"));
    }

    #[test]
    fn test_budget_output() {
        let settings = Settings::default();
        let budget = Budget::with_limit(Money::from_cents(10000));

        let unset = format_budget_report(&BudgetReport::generate(&[], &Budget::default()), &settings);
        assert!(unset.contains("No budget set"));

        let over = format_budget_report(
            &BudgetReport::generate(&[expense(12000, Category::Other, 1)], &budget),
            &settings,
        );
        assert!(over.contains("Over by:   $20.00"));
        assert!(over.contains("exceeded"));

        let near = format_budget_report(
            &BudgetReport::generate(&[expense(9000, Category::Other, 1)], &budget),
            &settings,
        );
        assert!(near.contains("Remaining: $10.00"));
        assert!(near.contains("close to your budget"));
    }
}

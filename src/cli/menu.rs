//! Interactive menu
//!
//! The numbered menu loop. Prompts re-ask on invalid input instead of
//! aborting; validation and position errors are reported and the loop goes
//! on. End of input ends the session like choosing Exit.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{
    format_budget_report, format_category_breakdown, format_expense_details,
    format_expense_table, format_monthly_report,
};
use crate::error::ExpenseResult;
use crate::models::{Category, Money};
use crate::reports::{CategoryBreakdown, MonthlyReport};
use crate::services::{BudgetService, LedgerService};
use crate::storage::Storage;

use super::expense::to_position;

const MENU: &str = "\
What would you like to do?
 1. Add expense
 2. View expenses
 3. Delete expense
 4. Check budget
 5. Set budget
 6. Search expenses
 7. Category breakdown
 8. Monthly report
 9. Clear all expenses
10. Exit
";

/// What the loop should do after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive session over any input/output pair
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    ///
    /// Only unrecoverable errors (a corrupted store, I/O failure) end the
    /// session with an error.
    pub fn run(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\n=== Expense Tracker ===")?;
        writeln!(self.output, "Welcome to your expense tracker!\n")?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-10): ")? else {
                break;
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    writeln!(self.output, "{}\n", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Thanks for using the Expense Tracker. Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> ExpenseResult<Flow> {
        match choice {
            "1" => self.add(),
            "2" => self.view(),
            "3" => self.delete(),
            "4" => self.check_budget(),
            "5" => self.set_budget(),
            "6" => self.search(),
            "7" => self.category_breakdown(),
            "8" => self.monthly_report(),
            "9" => self.clear(),
            "10" => Ok(Flow::Exit),
            _ => {
                writeln!(
                    self.output,
                    "Invalid choice. Please enter a number from 1 to 10.\n"
                )?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> ExpenseResult<Flow> {
        let Some(name) = self.prompt_until("Enter expense name: ", |s| {
            if s.trim().is_empty() {
                Err("Expense name cannot be empty.".to_string())
            } else {
                Ok(s.trim().to_string())
            }
        })?
        else {
            return Ok(Flow::Exit);
        };

        let Some(amount) = self.prompt_until("Enter expense amount: $", positive_amount)? else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "Select a category:")?;
        for category in Category::ALL {
            writeln!(self.output, "  {}. {}", category.menu_number(), category)?;
        }
        let prompt = format!("Enter category (1-{}): ", Category::ALL.len());
        let Some(category) = self.prompt_until(&prompt, |s| {
            s.trim()
                .parse::<usize>()
                .ok()
                .and_then(Category::from_menu_number)
                .ok_or_else(|| {
                    format!("Please enter a number from 1 to {}.", Category::ALL.len())
                })
        })?
        else {
            return Ok(Flow::Exit);
        };

        let expense = LedgerService::new(self.storage).add(&name, amount, category)?;
        writeln!(self.output, "Expense '{}' added successfully!", expense.name)?;
        write!(self.output, "{}", format_expense_details(&expense, self.settings))?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> ExpenseResult<Flow> {
        let expenses = LedgerService::new(self.storage).list()?;
        let numbered: Vec<_> = expenses
            .into_iter()
            .enumerate()
            .map(|(i, e)| (i + 1, e))
            .collect();

        writeln!(self.output, "\n--- Your Expenses ---")?;
        writeln!(self.output, "{}", format_expense_table(&numbered, self.settings))?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> ExpenseResult<Flow> {
        let ledger = LedgerService::new(self.storage);
        let expenses = ledger.list()?;
        if expenses.is_empty() {
            writeln!(self.output, "No expenses to delete.\n")?;
            return Ok(Flow::Continue);
        }

        self.view()?;
        let Some(position) = self.prompt_until("Enter the number to delete (0 to cancel): ", |s| {
            s.trim()
                .parse::<i64>()
                .map_err(|_| "Please enter a whole number.".to_string())
        })?
        else {
            return Ok(Flow::Exit);
        };

        if position == 0 {
            writeln!(self.output, "Delete cancelled.\n")?;
            return Ok(Flow::Continue);
        }

        let removed = ledger.delete_at(to_position(position, expenses.len())?)?;
        writeln!(self.output, "Deleted expense '{}'.\n", removed.name)?;
        Ok(Flow::Continue)
    }

    fn check_budget(&mut self) -> ExpenseResult<Flow> {
        let report = BudgetService::new(self.storage).check(None)?;
        writeln!(self.output, "{}", format_budget_report(&report, self.settings))?;
        Ok(Flow::Continue)
    }

    fn set_budget(&mut self) -> ExpenseResult<Flow> {
        let Some(amount) = self.prompt_until("Enter monthly budget: $", positive_amount)? else {
            return Ok(Flow::Exit);
        };

        BudgetService::new(self.storage).set_limit(amount)?;
        writeln!(
            self.output,
            "Budget set to {}\n",
            amount.format_with_symbol(&self.settings.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> ExpenseResult<Flow> {
        let Some(keyword) = self.prompt("Enter search keyword: ")? else {
            return Ok(Flow::Exit);
        };
        let keyword = keyword.trim();

        let matches = LedgerService::new(self.storage).search_with_positions(keyword)?;
        if matches.is_empty() {
            writeln!(self.output, "No expenses found matching '{}'.\n", keyword)?;
        } else {
            writeln!(self.output, "\n--- Expenses matching '{}' ---", keyword)?;
            writeln!(self.output, "{}", format_expense_table(&matches, self.settings))?;
        }
        Ok(Flow::Continue)
    }

    fn category_breakdown(&mut self) -> ExpenseResult<Flow> {
        let expenses = LedgerService::new(self.storage).list()?;
        let report = CategoryBreakdown::generate(&expenses);
        writeln!(self.output, "{}", format_category_breakdown(&report, self.settings))?;
        Ok(Flow::Continue)
    }

    fn monthly_report(&mut self) -> ExpenseResult<Flow> {
        let expenses = LedgerService::new(self.storage).list()?;
        let report = MonthlyReport::generate(&expenses);
        writeln!(self.output, "{}", format_monthly_report(&report, self.settings))?;
        Ok(Flow::Continue)
    }

    fn clear(&mut self) -> ExpenseResult<Flow> {
        let Some(confirm) =
            self.prompt("Are you sure you want to delete ALL expenses? (yes/no): ")?
        else {
            return Ok(Flow::Exit);
        };

        if confirm.trim().eq_ignore_ascii_case("yes") {
            let removed = LedgerService::new(self.storage).clear()?;
            writeln!(self.output, "All expenses have been cleared ({} removed).\n", removed)?;
        } else {
            writeln!(self.output, "Clear operation cancelled.\n")?;
        }
        Ok(Flow::Continue)
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt repeatedly until `parse` accepts the answer
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> ExpenseResult<Option<T>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => writeln!(self.output, "{}\n", message)?,
            }
        }
    }
}

fn positive_amount(s: &str) -> Result<Money, String> {
    match Money::parse(s) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        Ok(_) => Err("Amount must be greater than 0.".to_string()),
        Err(_) => Err("Invalid amount. Please enter a valid number.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::storage::MemoryBudgetStore;

    fn run_session(storage: &Storage, script: &str) -> String {
        let settings = Settings::default();
        let mut output = Vec::new();
        Menu::new(storage, &settings, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_with_reprompts() {
        let storage = Storage::in_memory();
        let output = run_session(&storage, "1\n\nLunch\nabc\n-4\n12.50\n9\n2\n10\n");

        assert!(output.contains("Expense name cannot be empty."));
        assert!(output.contains("Invalid amount."));
        assert!(output.contains("Amount must be greater than 0."));
        assert!(output.contains("Please enter a number from 1 to 7."));
        assert!(output.contains("Expense 'Lunch' added successfully!"));

        let expenses = LedgerService::new(&storage).list().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount.cents(), 1250);
        assert_eq!(expenses[0].category, Category::Transportation);
    }

    #[test]
    fn test_delete_cancel_and_out_of_range() {
        let storage = Storage::in_memory();
        let ledger = LedgerService::new(&storage);
        ledger.add("Milk", Money::from_cents(199), Category::Food).unwrap();
        ledger.add("Eggs", Money::from_cents(349), Category::Food).unwrap();

        let output = run_session(&storage, "3\n0\n3\n7\n3\n1\n10\n");

        assert!(output.contains("Delete cancelled."));
        assert!(output.contains("No expense at position 7 (ledger has 2)"));
        assert!(output.contains("Deleted expense 'Milk'."));

        let names: Vec<_> = ledger.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Eggs"]);
    }

    #[test]
    fn test_budget_flow() {
        let storage = Storage::in_memory();
        LedgerService::new(&storage)
            .add("Rent", Money::from_cents(95000), Category::Utilities)
            .unwrap();

        let output = run_session(&storage, "4\n5\n0\n1000\n4\n10\n");

        assert!(output.contains("No budget set"));
        assert!(output.contains("Budget set to $1000.00"));
        assert!(output.contains("Remaining: $50.00"));
        assert!(output.contains("close to your budget"));
    }

    #[test]
    fn test_clear_requires_yes() {
        let storage = Storage::in_memory();
        let ledger = LedgerService::new(&storage);
        ledger.add("Snack", Money::from_cents(150), Category::Food).unwrap();

        let output = run_session(&storage, "9\nno\n10\n");
        assert!(output.contains("Clear operation cancelled."));
        assert_eq!(ledger.count().unwrap(), 1);

        run_session(&storage, "9\nyes\n10\n");
        assert_eq!(ledger.count().unwrap(), 0);
    }

    #[test]
    fn test_search_and_reports() {
        let storage = Storage::in_memory();
        let ledger = LedgerService::new(&storage);
        ledger.add("Coffee", Money::from_cents(400), Category::Food).unwrap();
        ledger.add("Taxi", Money::from_cents(1600), Category::Transportation).unwrap();

        let output = run_session(&storage, "6\ncoff\n7\n8\n2\n10\n");

        assert!(output.contains("Expenses matching 'coff'"));
        assert!(output.contains("Spending by Category"));
        assert!(output.contains("Monthly Report"));
        assert!(output.contains("Total: $20.00 (2 expenses)"));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let storage = Storage::in_memory();
        let output = run_session(&storage, "42\n");

        assert!(output.contains("Invalid choice."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_malformed_store_ends_session() {
        struct Broken;
        impl crate::storage::ExpenseStore for Broken {
            fn load_collection(&self) -> ExpenseResult<Vec<crate::models::Expense>> {
                Err(ExpenseError::malformed("expenses.json", "bad"))
            }
            fn save_collection(&self, _: &[crate::models::Expense]) -> ExpenseResult<()> {
                Ok(())
            }
        }

        let storage = Storage::from_stores(Box::new(Broken), Box::new(MemoryBudgetStore::new()));
        let settings = Settings::default();
        let mut output = Vec::new();
        let err = Menu::new(&storage, &settings, "2\n10\n".as_bytes(), &mut output)
            .run()
            .unwrap_err();
        assert!(err.is_malformed_store());
    }
}

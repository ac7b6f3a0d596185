//! Interactive menu loop.
//!
//! The shell is a small state machine over an injected reader and writer, so
//! it runs the same against stdin/stdout or a scripted session in tests.
//! End of input at any prompt terminates the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::partition::DEFAULT_PASS_MARK;
use crate::output::save_to_csv;
use crate::parser::load_from_csv;
use crate::report::print_report;
use crate::stats::AnalysisSummary;
use crate::store::RecordStore;

/// CSV path used when the load prompt is left blank.
pub const DEFAULT_INPUT_CSV: &str = "students.csv";
/// CSV path used when the save prompt is left blank.
pub const DEFAULT_OUTPUT_CSV: &str = "final_grades.csv";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellState {
    MenuIdle,
    ManualEntry,
    CsvLoad,
    Analyzing(RecordStore),
    Terminated,
}

impl ShellState {
    pub fn name(&self) -> &'static str {
        match self {
            ShellState::MenuIdle => "menu_idle",
            ShellState::ManualEntry => "manual_entry",
            ShellState::CsvLoad => "csv_load",
            ShellState::Analyzing(_) => "analyzing",
            ShellState::Terminated => "terminated",
        }
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    pass_mark: f64,
    state: ShellState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pass_mark: DEFAULT_PASS_MARK,
            state: ShellState::MenuIdle,
        }
    }

    pub fn with_pass_mark(mut self, pass_mark: f64) -> Self {
        self.pass_mark = pass_mark;
        self
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Console I/O failures and CSV save failures other than a missing input
    /// file are returned to the caller.
    pub fn run(&mut self) -> Result<()> {
        info!("Interactive session started");
        while self.state != ShellState::Terminated {
            self.step()?;
        }
        info!("Interactive session ended");
        Ok(())
    }

    /// Performs one transition from the current state.
    pub fn step(&mut self) -> Result<()> {
        let current = std::mem::replace(&mut self.state, ShellState::Terminated);
        let from = current.name();

        let next = match current {
            ShellState::MenuIdle => self.menu()?,
            ShellState::ManualEntry => self.manual_entry()?,
            ShellState::CsvLoad => self.csv_load()?,
            ShellState::Analyzing(store) => self.analyze(&store)?,
            ShellState::Terminated => ShellState::Terminated,
        };

        debug!(from, to = next.name(), "Shell transition");
        self.state = next;
        Ok(())
    }

    fn menu(&mut self) -> Result<ShellState> {
        writeln!(self.output, "\n1) Manual entry")?;
        writeln!(self.output, "2) Load from CSV")?;
        writeln!(self.output, "3) Exit")?;

        let Some(choice) = self.prompt("Choose (1/2/3): ")? else {
            return Ok(ShellState::Terminated);
        };

        let next = match choice.as_str() {
            "1" => ShellState::ManualEntry,
            "2" => ShellState::CsvLoad,
            "3" => {
                writeln!(self.output, "Bye!")?;
                ShellState::Terminated
            }
            _ => {
                writeln!(self.output, "Invalid choice.")?;
                ShellState::MenuIdle
            }
        };
        Ok(next)
    }

    fn manual_entry(&mut self) -> Result<ShellState> {
        writeln!(self.output, "Enter student data. Blank name to stop.")?;
        let mut store = RecordStore::new();

        loop {
            let Some(name) = self.prompt("Name: ")? else {
                return Ok(ShellState::Terminated);
            };
            if name.is_empty() {
                break;
            }

            let Some(mark) = self.prompt("Marks (0-100): ")? else {
                return Ok(ShellState::Terminated);
            };
            match mark.parse::<f64>() {
                Ok(score) => {
                    store.insert(name, score);
                }
                Err(_) => {
                    debug!(input = %mark, "Rejected non-numeric mark");
                    writeln!(self.output, "Invalid mark, try again.")?;
                }
            }
        }

        Ok(ShellState::Analyzing(store))
    }

    fn csv_load(&mut self) -> Result<ShellState> {
        let Some(path) = self.prompt("CSV path (default students.csv): ")? else {
            return Ok(ShellState::Terminated);
        };
        let path = if path.is_empty() {
            DEFAULT_INPUT_CSV.to_string()
        } else {
            path
        };

        let store = match load_from_csv(&path)? {
            Some(store) => store,
            None => {
                writeln!(self.output, "CSV file not found: {}", path)?;
                RecordStore::new()
            }
        };

        if store.is_empty() {
            writeln!(self.output, "No valid data loaded from CSV.")?;
            return Ok(ShellState::MenuIdle);
        }
        Ok(ShellState::Analyzing(store))
    }

    fn analyze(&mut self, store: &RecordStore) -> Result<ShellState> {
        let summary = AnalysisSummary::from_store(store, self.pass_mark);
        print_report(&mut self.output, store, &summary)?;

        if store.is_empty() {
            return Ok(ShellState::MenuIdle);
        }

        let Some(answer) = self.prompt("Save results to CSV? (y/n): ")? else {
            return Ok(ShellState::Terminated);
        };
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(ShellState::MenuIdle);
        }

        let Some(out) = self.prompt("Output filename (default final_grades.csv): ")? else {
            return Ok(ShellState::Terminated);
        };
        let out = if out.is_empty() {
            DEFAULT_OUTPUT_CSV.to_string()
        } else {
            out
        };

        save_to_csv(&out, store, &summary.grades)?;
        writeln!(self.output, "Saved to {}", out)?;
        Ok(ShellState::MenuIdle)
    }

    /// Writes `message` without a newline and reads one trimmed line.
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (String, ShellState) {
        let mut shell = Shell::new(script.as_bytes(), Vec::new());
        shell.run().unwrap();
        let state = shell.state().clone();
        (String::from_utf8(shell.into_output()).unwrap(), state)
    }

    #[test]
    fn test_exit_immediately() {
        let (out, state) = run_script("3\n");
        assert!(out.contains("1) Manual entry"));
        assert!(out.ends_with("Bye!\n"));
        assert_eq!(state, ShellState::Terminated);
    }

    #[test]
    fn test_end_of_input_terminates() {
        let (out, state) = run_script("");
        assert!(out.ends_with("Choose (1/2/3): "));
        assert_eq!(state, ShellState::Terminated);
    }

    #[test]
    fn test_invalid_choice_returns_to_menu() {
        let (out, _) = run_script("9\n3\n");
        assert!(out.contains("Invalid choice.\n"));
        assert_eq!(out.matches("Choose (1/2/3): ").count(), 2);
    }

    #[test]
    fn test_manual_entry_rejects_bad_marks() {
        let (out, _) = run_script("1\nAlice\nninety\nAlice\n91\nBob\n35\n\nn\n3\n");

        assert!(out.contains("Enter student data. Blank name to stop.\n"));
        assert!(out.contains("Invalid mark, try again.\n"));
        assert!(out.contains("Students: 2\n"));
        assert!(out.contains("Passed (1): Alice\n"));
        assert!(out.contains("Failed (1): Bob\n"));
        assert!(!out.contains("Saved to"));
    }

    #[test]
    fn test_manual_entry_with_no_students() {
        let (out, _) = run_script("1\n\n3\n");
        assert!(out.contains("No data to analyze.\n"));
        assert!(!out.contains("Save results to CSV?"));
    }

    #[test]
    fn test_step_moves_through_states() {
        let mut shell = Shell::new("1\nAmy\n88\n\n".as_bytes(), Vec::new());

        shell.step().unwrap();
        assert_eq!(shell.state(), &ShellState::ManualEntry);

        shell.step().unwrap();
        let expected: RecordStore = [("Amy", 88.0)].into_iter().collect();
        assert_eq!(shell.state(), &ShellState::Analyzing(expected));

        // Save prompt hits end of input.
        shell.step().unwrap();
        assert_eq!(shell.state(), &ShellState::Terminated);
    }

    #[test]
    fn test_missing_csv_reports_and_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let script = format!("2\n{}\n3\n", missing.display());
        let (out, _) = run_script(&script);

        assert!(out.contains(&format!("CSV file not found: {}\n", missing.display())));
        assert!(out.contains("No valid data loaded from CSV.\n"));
        assert!(!out.contains("--- Summary ---"));
    }

    #[test]
    fn test_custom_pass_mark() {
        let mut shell =
            Shell::new("1\nBob\n55\n\nn\n3\n".as_bytes(), Vec::new()).with_pass_mark(60.0);
        shell.run().unwrap();
        let out = String::from_utf8(shell.into_output()).unwrap();

        assert!(out.contains("Failed (1): Bob\n"));
    }
}

//! Terminal front-end for the dashboard.

use std::io::{self, BufRead};
use std::sync::Mutex;

use super::console::Console;
use crate::model::RepoId;
use crate::ports::ui::{DashboardUi, SelectorState};
use crate::summary::SummaryRecord;

enum Picker {
    Hidden,
    Selector { repos: Vec<RepoId>, current: usize },
    Manual,
}

/// Line-oriented dashboard UI.
///
/// Load requests are lines read from the input: a registry number, an
/// `org/repo` identifier, or an empty line to reload the current
/// selection. `q` or end of input closes the dashboard.
pub struct TerminalUi {
    console: Console,
    input: Mutex<Box<dyn BufRead + Send>>,
    picker: Mutex<Picker>,
    last_line: Mutex<String>,
    show_raw: bool,
}

impl TerminalUi {
    /// A UI on stdin and the given console.
    #[must_use]
    pub fn stdio(console: Console, show_raw: bool) -> Self {
        Self::new(Box::new(io::BufReader::new(io::stdin())), console, show_raw)
    }

    /// A UI reading requests from `input`.
    #[must_use]
    pub fn new(input: Box<dyn BufRead + Send>, console: Console, show_raw: bool) -> Self {
        Self {
            console,
            input: Mutex::new(input),
            picker: Mutex::new(Picker::Hidden),
            last_line: Mutex::new(String::new()),
            show_raw,
        }
    }
}

impl DashboardUi for TerminalUi {
    fn show_selector(&self, repos: &[RepoId]) {
        self.console.line("Repositories:");
        for (i, repo) in repos.iter().enumerate() {
            self.console.line(&format!("  {:>2}. {repo}", i + 1));
        }
        if let Ok(mut picker) = self.picker.lock() {
            *picker = Picker::Selector { repos: repos.to_vec(), current: 0 };
        }
    }

    fn show_manual_entry(&self) {
        self.console.line("No repository registry found; enter repositories as org/repo.");
        if let Ok(mut picker) = self.picker.lock() {
            *picker = Picker::Manual;
        }
    }

    fn selector_state(&self) -> SelectorState {
        let line = self.last_line.lock().map(|l| l.clone()).unwrap_or_default();
        let Ok(mut picker) = self.picker.lock() else {
            return SelectorState::Manual(line);
        };
        match &mut *picker {
            Picker::Selector { repos, current } => {
                let chosen = line.trim();
                if chosen.is_empty() {
                    return SelectorState::Selected(repos[*current].to_string());
                }
                match chosen.parse::<usize>() {
                    Ok(n) if (1..=repos.len()).contains(&n) => {
                        *current = n - 1;
                        SelectorState::Selected(repos[*current].to_string())
                    }
                    _ => SelectorState::Selected(chosen.to_string()),
                }
            }
            Picker::Manual | Picker::Hidden => SelectorState::Manual(line),
        }
    }

    fn wait_for_load_request(&self) -> bool {
        let prompt = match self.picker.lock().as_deref() {
            Ok(Picker::Selector { repos, .. }) => {
                format!("repository [1-{}, org/repo, enter = reload, q = quit]> ", repos.len())
            }
            _ => "repository [org/repo, q = quit]> ".to_string(),
        };
        self.console.prompt(&prompt);

        let mut line = String::new();
        let read = match self.input.lock() {
            Ok(mut input) => input.read_line(&mut line),
            Err(_) => return false,
        };
        if !matches!(read, Ok(n) if n > 0) {
            self.console.line("");
            return false;
        }
        let line = line.trim().to_string();
        if line == "q" || line == "quit" {
            return false;
        }
        if let Ok(mut last) = self.last_line.lock() {
            *last = line;
        }
        true
    }

    fn set_status(&self, text: &str) {
        self.console.line(&format!("» {text}"));
    }

    fn render_summary(&self, records: &[SummaryRecord]) {
        let key_width = records.iter().map(|r| r.key.len()).max().unwrap_or(0);
        let mut section = "";
        for record in records {
            if record.section != section {
                section = record.section;
                self.console.line(&format!("[{section}]"));
            }
            self.console.line(&format!("  {:<key_width$}  {}", record.key, record.value));
        }
    }

    fn render_raw_document(&self, json: &str) {
        if self.show_raw {
            self.console.line(json);
        }
    }

    fn alert(&self, message: &str) {
        self.console.line(&format!("! {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::console::Capture;

    fn ui(input: &str) -> (TerminalUi, Capture) {
        let capture = Capture::default();
        let ui = TerminalUi::new(
            Box::new(io::Cursor::new(input.to_string().into_bytes())),
            capture.console(),
            false,
        );
        (ui, capture)
    }

    fn repos() -> Vec<RepoId> {
        vec!["acme/app".parse().unwrap(), "acme/lib".parse().unwrap()]
    }

    #[test]
    fn selector_resolves_numbers_and_reloads() {
        let (ui, _) = ui("2\n\nq\n");
        ui.show_selector(&repos());

        assert!(ui.wait_for_load_request());
        assert_eq!(ui.selector_state(), SelectorState::Selected("acme/lib".into()));

        assert!(ui.wait_for_load_request());
        assert_eq!(ui.selector_state(), SelectorState::Selected("acme/lib".into()));

        assert!(!ui.wait_for_load_request());
    }

    #[test]
    fn selector_passes_through_typed_identifiers() {
        let (ui, _) = ui("other/repo\n");
        ui.show_selector(&repos());
        assert!(ui.wait_for_load_request());
        assert_eq!(ui.selector_state(), SelectorState::Selected("other/repo".into()));
    }

    #[test]
    fn manual_entry_returns_typed_text() {
        let (ui, capture) = ui("  acme/app  \n");
        ui.show_manual_entry();
        assert!(ui.wait_for_load_request());
        assert_eq!(ui.selector_state(), SelectorState::Manual("acme/app".into()));
        assert!(capture.contents().contains("enter repositories as org/repo"));
    }

    #[test]
    fn end_of_input_closes() {
        let (ui, _) = ui("");
        assert!(!ui.wait_for_load_request());
    }

    #[test]
    fn summary_groups_by_section() {
        let (ui, capture) = ui("");
        ui.render_summary(&[
            SummaryRecord { section: "UI", key: "Compose functions", value: "140".into() },
            SummaryRecord { section: "UI", key: "View-like files", value: "9".into() },
            SummaryRecord { section: "Build", key: "kapt / ksp", value: "4 / 1".into() },
        ]);
        let out = capture.contents();
        assert_eq!(out.matches("[UI]").count(), 1);
        assert!(out.contains("  Compose functions  140\n"));
        assert!(out.contains("[Build]\n  kapt / ksp         4 / 1\n"));
    }

    #[test]
    fn raw_document_only_when_enabled() {
        let (ui, capture) = ui("");
        ui.render_raw_document("{\"a\": 1}");
        assert!(capture.contents().is_empty());
    }
}

// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal (tables), quiet (IDs only), and JSON-lines output.

use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly tables and messages
    Normal,
    /// First column only, for piping into other commands
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a collection: a table, its first column, or one JSON object per line.
    pub fn list<T, F>(&self, headers: &[&str], items: &[T], row: F)
    where
        T: Serialize,
        F: Fn(&T) -> Vec<String>,
    {
        match self.mode {
            OutputMode::Normal => {
                let rows: Vec<Vec<String>> = items.iter().map(row).collect();
                print!("{}", render_table(headers, &rows));
            }
            OutputMode::Quiet => {
                for item in items {
                    if let Some(first) = row(item).into_iter().next() {
                        println!("{first}");
                    }
                }
            }
            OutputMode::Json => {
                for item in items {
                    if let Ok(json) = serde_json::to_string(item) {
                        println!("{json}");
                    }
                }
            }
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                println!("{message}");
            }
            OutputMode::Json => self.emit_json("success", message, false),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => self.emit_json("error", message, true),
        }
    }

    fn emit_json(&self, event: &str, message: &str, to_stderr: bool) {
        let event = JsonEvent {
            event,
            message,
            duration_secs: self.start_time.map(|_| self.elapsed_secs()),
        };
        if let Ok(json) = serde_json::to_string(&event) {
            if to_stderr {
                eprintln!("{json}");
            } else {
                println!("{json}");
            }
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

/// Left-aligned columns separated by three spaces, like `docker ps`.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let format_line = |cells: Vec<&str>| {
        let last = cells.len().saturating_sub(1);
        let mut line = String::new();
        for (i, cell) in cells.into_iter().enumerate() {
            if i == last {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}   ", cell, width = widths[i]));
            }
        }
        line.push('\n');
        line
    };

    let mut out = format_line(headers.to_vec());
    for row in rows {
        out.push_str(&format_line(row.iter().map(String::as_str).collect()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            vec!["abc".to_string(), "running".to_string()],
            vec!["0123456789ab".to_string(), "exited".to_string()],
        ];
        let table = render_table(&["CONTAINER ID", "STATE"], &rows);
        assert_eq!(
            table,
            "CONTAINER ID   STATE\nabc            running\n0123456789ab   exited\n"
        );
    }

    #[test]
    fn table_with_no_rows_prints_headers() {
        assert_eq!(render_table(&["IMAGE", "SIZE"], &[]), "IMAGE   SIZE\n");
    }
}

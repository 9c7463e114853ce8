use inquire::{Confirm, Text};
use miette::Diagnostic;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("failed to read structure input")]
    #[diagnostic(
        code(sapling::prompt::read),
        help("Structure lines are read until a line equal to 'done'.")
    )]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("interactive prompt failed")]
    #[diagnostic(
        code(sapling::prompt::interactive),
        help("Run sapling from an interactive terminal.")
    )]
    Interactive {
        #[from]
        source: inquire::InquireError,
    },
}

/// Line that ends structure input, compared case-insensitively.
pub const INPUT_SENTINEL: &str = "done";

/// Collects structure lines until the sentinel (or end of input) and joins
/// them with newlines.
///
/// Generic over [`BufRead`] so tests can drive it with in-memory input. The
/// structure body is read as raw lines rather than through `inquire`: a
/// pasted tree has to arrive verbatim, and a per-line prompt would redraw
/// over it.
pub fn collect_structure_text<R: BufRead>(reader: R) -> Result<String, PromptError> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|error| PromptError::Read { source: error })?;
        if line.eq_ignore_ascii_case(INPUT_SENTINEL) {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Asks where the structure should be created. Defaults to the current
/// directory.
pub fn get_destination() -> Result<String, PromptError> {
    let destination = Text::new("Destination path:")
        .with_help_message("Where the structure will be created")
        .with_default(".")
        .prompt()?;

    Ok(destination)
}

/// Confirmation gate shown after the preview. Nothing is written to disk
/// until this returns `true`.
pub fn confirm_apply() -> Result<bool, PromptError> {
    let confirmed = Confirm::new("Create this structure?")
        .with_default(true)
        .with_help_message("Press [y] to confirm or [n] to cancel")
        .prompt()?;

    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn collects_lines_until_the_sentinel() {
        let input = Cursor::new("src\n  main.py\ndone\nignored\n");

        let text = collect_structure_text(input).unwrap();

        assert_eq!(text, "src\n  main.py");
    }

    #[test]
    fn sentinel_is_case_insensitive() {
        let input = Cursor::new("a.txt\nDONE\n");

        assert_eq!(collect_structure_text(input).unwrap(), "a.txt");
    }

    #[test]
    fn end_of_input_without_sentinel_keeps_what_was_read() {
        let input = Cursor::new("a.txt\nb.txt");

        assert_eq!(collect_structure_text(input).unwrap(), "a.txt\nb.txt");
    }

    #[test]
    fn blank_lines_are_kept_for_the_parser_to_skip() {
        let input = Cursor::new("src\n\n  main.py\ndone\n");

        assert_eq!(collect_structure_text(input).unwrap(), "src\n\n  main.py");
    }
}

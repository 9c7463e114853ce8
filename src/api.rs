use crate::{
    dispatch,
    materialize::{self, MaterializeError},
    preview,
    prompt::{self, PromptError},
};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SaplingError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] MaterializeError),
}

/// Runs one interactive session.
///
/// Collects structure text until the sentinel line, parses it in whichever
/// format applies, previews the result rooted at the prompted destination,
/// and materializes it once confirmed. Declining the confirmation creates
/// nothing.
///
/// # Errors
///
/// Returns a [`SaplingError`] if:
///
/// - Structure input cannot be read, or a prompt fails.
/// - The parsed structure is not a directory mapping at the top level.
/// - The base directory itself cannot be created.
///
/// Failures on individual entries below the base directory are not errors;
/// they are reported and the remaining entries are still processed.
pub fn run() -> Result<(), SaplingError> {
    println!("{}", "Project structure generator".bold());
    println!("Paste a directory tree, JSON, or YAML describing the layout.");
    println!(
        "Finish with a line containing '{}'.\n",
        prompt::INPUT_SENTINEL
    );

    let text = prompt::collect_structure_text(io::stdin().lock())?;
    log::debug!("collected {} bytes of structure text", text.len());

    let structure = dispatch::parse_structure(&text);
    match serde_json::to_string_pretty(&structure) {
        Ok(rendered) => log::debug!("parsed structure:\n{}", rendered),
        Err(error) => log::debug!("parsed structure could not be rendered: {}", error),
    }

    let destination = PathBuf::from(prompt::get_destination()?);

    preview::print_tree(&structure, &destination);

    if !prompt::confirm_apply()? {
        log::info!("canceled; nothing was created");
        return Ok(());
    }

    let report = materialize::create_project_structure(&destination, &structure)?;

    let failed = report.failures().count();

    println!(
        "\nProject structure created at {}",
        absolute_display(&destination).bold()
    );
    if failed > 0 {
        println!(
            "{} {} of {} entries could not be created",
            "warning:".yellow(),
            failed,
            report.outcomes.len()
        );
    }

    Ok(())
}

/// The created path as reported to the user. Falls back to the path as
/// typed when it cannot be canonicalized.
fn absolute_display(path: &Path) -> String {
    std::fs::canonicalize(path)
        .map(|absolute| absolute.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

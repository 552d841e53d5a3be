//! Warnings, notices and prompts written to stderr.

use std::io::Write;

use crossterm::style::Stylize;

use super::quiet;

/// Yellow warning; suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Red error; always shown.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Plain notice; suppressed in quiet mode.
pub fn info(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn settings_load_failed(err: &std::io::Error) {
    warn(&format!("Failed to load settings: {err}"));
}

pub fn settings_saved() {
    info("Defaults saved.");
}

pub fn nothing_to_save() {
    warn("Nothing to save: give --save the options to store (e.g. -l 16 --save).");
}

pub fn clipboard_copied() {
    info("*** -COPIED TO CLIPBOARD- ***");
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Summary after writing to a file, with an entropy estimate when known.
pub fn written(count: usize, path: &str, entropy: Option<(f64, &str)>) {
    match entropy {
        Some((bits, strength)) => info(&format!(
            "{count} value(s) \u{2192} {path} (~{bits:.1} bits, {strength})"
        )),
        None => info(&format!("{count} value(s) \u{2192} {path}")),
    }
}

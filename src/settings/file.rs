//! Settings file persistence.
//!
//! One line of comma separated fields. `|` escapes a literal `,` or `|`
//! inside the output path.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELDS: usize = 8;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number,
        settings.lower,
        settings.upper,
        settings.numeric,
        settings.special,
        settings.space,
        escape(&settings.output_file_path),
    );

    file.write_all(data.as_bytes())
}

/// Fill `settings` from `path`. A missing file is created with the current
/// values; a malformed one is overwritten with them.
pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts = split_escaped(line.trim_end_matches(['\n', '\r']), ',');
    if parts.len() != FIELDS {
        return save(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number = parts[1].parse().unwrap_or(settings.number);
    settings.lower = parts[2].parse().unwrap_or(settings.lower);
    settings.upper = parts[3].parse().unwrap_or(settings.upper);
    settings.numeric = parts[4].parse().unwrap_or(settings.numeric);
    settings.special = parts[5].parse().unwrap_or(settings.special);
    settings.space = parts[6].parse().unwrap_or(settings.space);
    settings.output_file_path = parts[7].clone();

    Ok(())
}

#[inline]
pub fn default_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/fakepass/settings", home)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

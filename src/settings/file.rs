//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes a literal `|` or `,`.
//! The fixed fields come first; every field after them is a favorite word.
//! Words never contain commas, so only the output path relies on escaping one.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use log::{info, warn};

use super::Settings;
use crate::pass::normalize_words;
use crate::rand::EntropySource;

const FIXED_FIELDS: usize = 7;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(to_line(settings).as_bytes())?;
    info!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !path.exists()
        && let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("failed to create settings directory: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        save(settings)?;
    } else if !parse_line(line.trim_end_matches(['\r', '\n']), settings) {
        warn!("malformed settings file {}, rewriting defaults", path.display());
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

pub fn get_path() -> PathBuf {
    if let Ok(path) = env::var("WORDPASS_SETTINGS")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/wordpass/settings")
}

fn to_line(settings: &Settings) -> String {
    let entropy = match settings.entropy {
        EntropySource::Seeded(_) => EntropySource::Thread.name(),
        other => other.name(),
    };

    let mut fields = vec![
        settings.pass_length.to_string(),
        settings.number_of_passwords.to_string(),
        settings.include_uppercase.to_string(),
        settings.include_digits.to_string(),
        settings.include_special.to_string(),
        escape(&settings.output_file_path),
        entropy.to_string(),
    ];
    fields.extend(settings.words.iter().map(|w| escape(w)));

    let mut line = fields.join(",");
    line.push('\n');
    line
}

/// Apply a stored line. Unparseable values keep their current setting;
/// a line with too few fields is rejected.
fn parse_line(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() < FIXED_FIELDS {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.include_uppercase = parts[2].parse().unwrap_or(settings.include_uppercase);
    settings.include_digits = parts[3].parse().unwrap_or(settings.include_digits);
    settings.include_special = parts[4].parse().unwrap_or(settings.include_special);
    settings.output_file_path = parts[5].clone();
    settings.entropy = EntropySource::from_name(&parts[6]).unwrap_or(settings.entropy);
    // Commas never survive in a word; split them the way the composer would.
    settings.words = normalize_words(&parts[FIXED_FIELDS..])
        .into_iter()
        .map(String::from)
        .collect();
    true
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '|' || c == ',' {
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

use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::warn;
use zeroize::{Zeroize, Zeroizing};

use crate::pass::{self, Sink, parse_length, strength};
use crate::settings::Settings;
use crate::terminal::{
    box_bottom, box_line, box_top, clear, print_success, print_warning,
    reset_terminal,
};

use super::{
    enter_prompt, get_editable_input, print_help, print_main_menu, print_passwords,
    print_settings_menu,
};

/// State kept across menu iterations.
pub struct Session {
    pub settings: Settings,
    last: Option<Zeroizing<String>>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            last: None,
        }
    }

    /// Generate with the current settings. Errors come back as the message
    /// to show under the menu.
    pub fn generate(&mut self) -> Result<(), String> {
        let count = self.settings.number_of_passwords.max(1);
        let request = self.settings.request();
        let mut rng = self.settings.entropy.open();

        if !self.settings.output_file_path.is_empty() {
            let path = Path::new(&self.settings.output_file_path);
            let batch = pass::generate_batch(&request, count, &mut rng, Sink::File(path))
                .map_err(|e| describe(&e))?;
            box_top("Complete");
            box_line(&format!(
                "{} password(s) \u{2192} {}",
                batch.generated, self.settings.output_file_path
            ));
            box_bottom();
            println!();
            return Ok(());
        }

        let batch = pass::generate_batch(&request, count, &mut rng, Sink::Collect)
            .map_err(|e| describe(&e))?;

        let summary = match (batch.min_bits, batch.max_bits) {
            (Some(min), Some(max)) if (max - min).abs() >= 0.05 => format!(
                "Entropy: {:.1}-{:.1} bits ({} to {}) \u{2022} Source: {}",
                min,
                max,
                strength::label(min),
                strength::label(max),
                self.settings.entropy
            ),
            (Some(bits), _) => format!(
                "Entropy: {:.1} bits ({}) \u{2022} Source: {}",
                bits,
                strength::label(bits),
                self.settings.entropy
            ),
            _ => String::new(),
        };
        print_passwords(&batch.collected, &summary);

        // Replacing the previous batch wipes it.
        self.last = Some(Zeroizing::new(batch.collected.trim_end().to_string()));
        Ok(())
    }

    /// Copy the last generated passwords.
    pub fn copy_last(&self) -> Result<(), String> {
        let Some(last) = self.last.as_ref() else {
            return Err("Generate a password first!".to_string());
        };

        let mut ctx = ClipboardContext::new().map_err(|e| {
            warn!("clipboard unavailable: {}", e);
            format!("Clipboard error: {e}")
        })?;
        ctx.set_contents(last.to_string())
            .map_err(|e| format!("Clipboard error: {e}"))?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

fn describe(err: &crate::error::Error) -> String {
    match err {
        crate::error::Error::Validation(v) => format!("{}: {}", v.title(), v),
        other => other.to_string(),
    }
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings: {}", e);
        print_warning(&format!("Error loading settings: {}", e));
        Settings::default()
    });
    let mut session = Session::new(settings);
    let mut error = None;

    loop {
        print_main_menu(&mut error);

        let Some(input) = get_editable_input(enter_prompt(), "") else {
            clear();
            continue;
        };

        match input.trim() {
            "" => {
                clear();
                if let Err(msg) = session.generate() {
                    error = Some(msg);
                }
                reset_terminal();
            }
            "1" => {
                update_settings(&mut session.settings);
                clear();
            }
            "2" => {
                clear();
                match session.copy_last() {
                    Ok(()) => print_success("Password copied to clipboard!"),
                    Err(msg) => print_warning(&msg),
                }
            }
            "3" => clear(),
            "4" => {
                clear();
                print_help();
            }
            "5" | "q" => {
                clear();
                break;
            }
            _ => {
                clear();
                error = Some("Invalid option.".to_string());
            }
        }
    }
}

/// Outcome of one settings menu choice.
#[derive(Debug, PartialEq)]
pub enum Choice {
    Stay,
    Exit,
    Invalid(String),
}

pub fn update_settings(settings: &mut Settings) {
    let mut error: Option<String> = None;

    loop {
        print_settings_menu(settings, error.as_deref());
        error = None;

        let Some(choice) = get_editable_input(enter_prompt(), "") else {
            break;
        };

        match apply_choice(choice.trim(), settings, &mut prompt_value) {
            Choice::Stay => {}
            Choice::Exit => break,
            Choice::Invalid(msg) => error = Some(msg),
        }
    }
}

fn prompt_value(label: &str, current: &str) -> Option<String> {
    get_editable_input(label, current)
}

/// Apply one settings menu choice. `ask` supplies new values for editable
/// fields and returns `None` when the edit is cancelled.
pub fn apply_choice<F>(choice: &str, settings: &mut Settings, ask: &mut F) -> Choice
where
    F: FnMut(&str, &str) -> Option<String>,
{
    match choice {
        "1" => {
            if let Some(text) = ask("Password length", &settings.pass_length.to_string()) {
                match parse_length(&text) {
                    Ok(length) => settings.pass_length = length,
                    Err(e) => return Choice::Invalid(e.to_string()),
                }
            }
        }
        "2" => {
            if let Some(text) = ask("Favorite words (comma-separated)", &settings.words_line()) {
                settings.set_words(&text);
            }
        }
        "3" => {
            if let Some(text) = ask(
                "Number of passwords",
                &settings.number_of_passwords.to_string(),
            ) {
                match text.trim().parse::<usize>() {
                    Ok(n) if n > 0 => settings.number_of_passwords = n,
                    _ => return Choice::Invalid("Please enter a number of at least 1.".into()),
                }
            }
        }
        "4" => settings.include_uppercase = !settings.include_uppercase,
        "5" => settings.include_digits = !settings.include_digits,
        "6" => settings.include_special = !settings.include_special,
        "7" => {
            if let Some(text) = ask("Output file (empty for terminal)", &settings.output_file_path)
            {
                settings.output_file_path = text.trim().to_string();
            }
        }
        "8" => settings.entropy = settings.entropy.toggled(),
        "r" => *settings = Settings::default(),
        "f" => match Settings::load_from_file() {
            Ok(saved) => *settings = saved,
            Err(e) => return Choice::Invalid(format!("Failed to load settings: {e}")),
        },
        "s" => {
            if let Err(e) = settings.save_to_file() {
                return Choice::Invalid(format!("Failed to save settings: {e}"));
            }
        }
        "e" | "" => return Choice::Exit,
        _ => return Choice::Invalid("Invalid input, please enter a valid menu option...".into()),
    }
    Choice::Stay
}

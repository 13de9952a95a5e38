//! CLI context - bundles settings, flags, and clipboard state.

use std::ops::ControlFlow;
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::warn;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::error::{Error, Result};
use crate::pass::{self, Sink, normalize_words, parse_length};
use crate::rand::EntropySource;
use crate::settings::Settings;
use crate::tui::print_help;

const DEFAULT_OUTPUT: &str = "wordpass.txt";

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and pick the starting settings.
    pub fn new(args: Vec<String>) -> Result<Self> {
        let flags = super::parse(&args)?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                warn!("failed to load settings: {}", e);
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags().is_break() {
            return Ok(());
        }
        quiet::set(self.flags.quiet);
        if self.apply_flags()?.is_break() {
            return Ok(());
        }
        self.handle_save()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> ControlFlow<()> {
        if self.flags.help {
            print_help();
            return ControlFlow::Break(());
        }
        if self.flags.version {
            println!("wordpass {}", env!("CARGO_PKG_VERSION"));
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    /// Apply CLI flags on top of the starting settings.
    fn apply_flags(&mut self) -> Result<ControlFlow<()>> {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(ref raw) = flags.length {
            settings.pass_length = parse_length(raw)?;
        }
        if !flags.words.is_empty() {
            settings.words = normalize_words(&flags.words)
                .into_iter()
                .map(String::from)
                .collect();
        }
        if let Some(num) = flags.number {
            settings.number_of_passwords = num;
        }

        if flags.no_upper {
            settings.include_uppercase = false;
        }
        if flags.no_digits {
            settings.include_digits = false;
        }
        if flags.no_special {
            settings.include_special = false;
        }

        if flags.secure {
            settings.entropy = EntropySource::Os;
        }
        if let Some(seed) = flags.seed {
            settings.entropy = EntropySource::Seeded(seed);
            prompts::seeded_warning();
        }

        if let Some(ref path) = flags.output {
            settings.output_file_path = output_path(path);
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    warn!("clipboard unavailable: {}", e);
                    if !prompts::clipboard_fallback_prompt() {
                        return Ok(ControlFlow::Break(()));
                    }
                    self.settings.to_clipboard = false;
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn handle_save(&self) -> Result<()> {
        if self.flags.save {
            self.settings.save_to_file()?;
            prompts::settings_saved(&Settings::path().display().to_string());
        }
        Ok(())
    }

    /// Generate passwords and send them where the settings say.
    pub fn generate_output(&mut self) -> Result<()> {
        let count = self.settings.number_of_passwords.max(1);
        let request = self.settings.request();
        let mut rng = self.settings.entropy.open();

        let batch = if self.settings.to_clipboard {
            let batch = pass::generate_batch(&request, count, &mut rng, Sink::Collect)?;
            if let Some(ctx) = self.clipboard.as_mut() {
                let contents = batch.collected.trim_end().to_string();
                ctx.set_contents(contents)
                    .map_err(|e| Error::Clipboard(e.to_string()))?;
                // Some providers keep a second copy after a read-back; wipe ours.
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied(batch.generated);
            }
            batch
        } else if !self.settings.output_file_path.is_empty() {
            let path = Path::new(&self.settings.output_file_path);
            let batch = pass::generate_batch(&request, count, &mut rng, Sink::File(path))?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::passwords_written(batch.generated, &full_path);
            batch
        } else {
            pass::generate_batch(&request, count, &mut rng, Sink::Terminal)?
        };

        if self.flags.entropy
            && let (Some(min), Some(max)) = (batch.min_bits, batch.max_bits)
        {
            prompts::entropy(min, max);
        }
        Ok(())
    }
}

/// Resolve `-o` values: `.` or a directory gets the default file name, and a
/// missing `.txt` extension is added.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}

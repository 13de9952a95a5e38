use crate::pass::{CharClass, MIN_LENGTH};
use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, box_wrapped,
    clear, flush, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_help() {
    box_top("Wordpass");
    box_line_center("Passwords built around a word you remember");
    box_line("");
    box_line("One of your favorite words is picked at random and kept intact");
    box_line("in the middle of the password. The rest is random characters");
    box_line("from the enabled classes. Lowercase letters are always used.");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments for the menu.");
    box_line("  2) Client: pass flags (e.g. -l 16 -w cat,owl) to generate");
    box_line("     without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  wordpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, at least {MIN_LENGTH} (default: 16)"),
    );
    box_opt("  -w, --words <LIST>", "Comma-separated favorite words. Repeatable.");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-special", "Leave out punctuation");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: wordpass.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -e, --entropy", "Report estimated entropy on stderr");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the effective settings as defaults");
    box_line("");
    box_line(" Entropy:");
    box_opt("      --secure", "Draw from the operating system CSPRNG");
    box_opt("      --seed <N>", "Reproducible output from a fixed seed");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  wordpass -l 12 -w cat         e.g. k#Qa9cat2@xB");
    box_line("  wordpass -w cat,owl -n 5      five passwords, one word each");
    box_line("  wordpass -s -b                saved settings, to clipboard");
    box_line("  wordpass -w kiwi --save       remember the word list");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_main_menu(error: &mut Option<String>) {
    box_top("Main Menu");
    box_line("");
    box_line("  1) settings");
    box_line("  2) copy to clipboard");
    box_line("  3) clear");
    box_line("  4) help");
    box_line("  5) quit");
    box_line("");
    box_bottom();

    match error.take() {
        Some(msg) => print_error(&msg),
        None => println!(),
    }
    flush();
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

pub fn print_settings_menu(settings: &Settings, error: Option<&str>) {
    clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Password Length: {}", settings.pass_length));
    if settings.words.is_empty() {
        box_line("  2) Favorite Words: (none)");
    } else {
        box_wrapped("  2) Favorite Words: ", &settings.words_line());
    }
    box_line(&format!(
        "  3) Number of Passwords: {}",
        settings.number_of_passwords
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Characters{RESET}:"));
    box_line(&format!(
        "  4) {}: {}",
        CharClass::Uppercase.label(),
        on_off(settings.include_uppercase)
    ));
    box_line(&format!(
        "  5) {}: {}",
        CharClass::Digits.label(),
        on_off(settings.include_digits)
    ));
    box_line(&format!(
        "  6) {}: {}",
        CharClass::Special.label(),
        on_off(settings.include_special)
    ));
    box_line(&format!("     {}: always", CharClass::Lowercase.label()));

    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    if settings.output_file_path.is_empty() {
        box_line("  7) Output file: (terminal)");
    } else {
        box_wrapped("  7) Output file: ", &settings.output_file_path);
    }

    box_line("");
    box_line(&format!("{UNDERLINE}Entropy{RESET}:"));
    box_line(&format!(
        "  8) Source: {} ({})",
        settings.entropy,
        settings.entropy.description()
    ));

    box_line("");
    print_rule();
    box_line("  r) load defaults | f) load saved | s) save | e) exit");
    box_bottom();

    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}

/// Show a generated batch with its strength summary.
pub fn print_passwords(passwords: &str, summary: &str) {
    box_top("Passwords");
    for line in passwords.lines() {
        box_line(line);
    }
    print_rule();
    box_line(summary);
    box_bottom();
    println!();
}

//! Interactive mode, entered when `wordpass` runs without arguments.
//!
//! The main menu generates with the saved settings and offers a settings
//! editor whose field prompts go through [`LineEditor`]. Validation failures
//! are shown inline and the menu keeps running.

mod input;
mod options;
mod text;

pub use input::{Action, LineEditor, get_editable_input};
pub use options::{Choice, Session, apply_choice, gen_main_menu, update_settings};
pub use text::{
    enter_prompt, print_help, print_main_menu, print_passwords, print_settings_menu,
};

/// Show the main menu until the user quits.
pub fn run() {
    log::debug!("starting interactive menu");
    gen_main_menu();
}

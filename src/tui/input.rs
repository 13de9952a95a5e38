//! Single-line editor for menu prompts.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// What a key press asks the prompt to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Submit,
    Cancel,
    Interrupt,
}

/// Editable text with a cursor, counted in characters.
#[derive(Debug, Default)]
pub struct LineEditor {
    text: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        let text: Vec<char> = initial.chars().collect();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn apply(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Action::Interrupt,
            KeyCode::Char('q') if ctrl => return Action::Cancel,
            KeyCode::Esc => return Action::Cancel,
            KeyCode::Enter => return Action::Submit,
            KeyCode::Char('u') if ctrl => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.text.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.text.len() => {
                self.text.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.text.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.len(),
            KeyCode::Char(c) if !ctrl => {
                self.text.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Action::Edit
    }

    fn redraw(&self, prompt: &str) {
        print!("\r{}: {}\x1b[K", prompt, self.text());
        // columns are 1-based; ": " follows the prompt
        print!("\x1b[{}G", prompt.chars().count() + 3 + self.cursor);
        flush();
    }
}

/// Read one line in raw mode. `None` when the user cancels.
///
/// Ctrl+C restores the terminal and exits.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut editor = LineEditor::new(initial_value);

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()),
    };

    editor.redraw(prompt);

    let action = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                match editor.apply(key) {
                    Action::Edit => editor.redraw(prompt),
                    done => break done,
                }
            }
            Ok(_) => {}
            Err(_) => break Action::Cancel,
        }
    };

    guard.release();
    println!();

    match action {
        Action::Interrupt => {
            reset_terminal();
            std::process::exit(130);
        }
        Action::Cancel => None,
        _ => Some(editor.text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(editor: &mut LineEditor, s: &str) {
        for c in s.chars() {
            assert_eq!(editor.apply(key(KeyCode::Char(c))), Action::Edit);
        }
    }

    #[test]
    fn typing_and_cursor_movement() {
        let mut ed = LineEditor::new("cat");
        assert_eq!(ed.cursor(), 3);
        ed.apply(key(KeyCode::Home));
        type_str(&mut ed, "big ");
        assert_eq!(ed.text(), "big cat");
        ed.apply(key(KeyCode::End));
        ed.apply(key(KeyCode::Backspace));
        assert_eq!(ed.text(), "big ca");
        ed.apply(key(KeyCode::Left));
        ed.apply(key(KeyCode::Delete));
        assert_eq!(ed.text(), "big c");
    }

    #[test]
    fn edits_count_characters() {
        let mut ed = LineEditor::new("café");
        ed.apply(key(KeyCode::Backspace));
        assert_eq!(ed.text(), "caf");
        ed.apply(key(KeyCode::Right));
        assert_eq!(ed.cursor(), 3);
    }

    #[test]
    fn boundaries_are_safe() {
        let mut ed = LineEditor::new("");
        ed.apply(key(KeyCode::Backspace));
        ed.apply(key(KeyCode::Delete));
        ed.apply(key(KeyCode::Left));
        assert_eq!(ed.text(), "");
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn control_keys() {
        let mut ed = LineEditor::new("owl");
        assert_eq!(ed.apply(ctrl('u')), Action::Edit);
        assert_eq!(ed.text(), "");
        assert_eq!(ed.apply(ctrl('q')), Action::Cancel);
        assert_eq!(ed.apply(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(ed.apply(ctrl('c')), Action::Interrupt);
        assert_eq!(ed.apply(key(KeyCode::Enter)), Action::Submit);
        // unbound control chords are not inserted
        ed.apply(ctrl('x'));
        assert_eq!(ed.text(), "");
    }
}

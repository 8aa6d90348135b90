// Chunk: docs/chunks/editable_buffer - Input events + editable buffer
//!
//! Edit commands.
//!
//! Keystrokes are resolved to commands by a stateless function, and each
//! command is exactly one call into the buffer. The caller redraws after
//! every command, so the renderer never observes a half-applied edit.

use parsec_buffer::{BufferError, TextBuffer};
use tracing::debug;

/// Keys the editor understands, already decoded from device events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    Return,
    Tab,
    Backspace,
    /// Forward delete
    Delete,
    Left,
    Right,
    Home,
    End,
    Escape,
}

/// Commands that can be executed on the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    InsertChar(char),
    InsertNewline,
    InsertTab,
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Delete the character after the cursor (Delete key)
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveToStart,
    MoveToEnd,
    /// Place the cursor at a visible-text offset (e.g. from a click)
    MoveTo(usize),
}

/// Resolves a key to a command.
///
/// Returns `None` for keys with no editing meaning.
pub fn resolve_key(key: Key) -> Option<EditCommand> {
    match key {
        Key::Char(ch) if !ch.is_control() => Some(EditCommand::InsertChar(ch)),
        Key::Char(_) | Key::Escape => None,
        Key::Return => Some(EditCommand::InsertNewline),
        Key::Tab => Some(EditCommand::InsertTab),
        Key::Backspace => Some(EditCommand::DeleteBackward),
        Key::Delete => Some(EditCommand::DeleteForward),
        Key::Left => Some(EditCommand::MoveLeft),
        Key::Right => Some(EditCommand::MoveRight),
        Key::Home => Some(EditCommand::MoveToStart),
        Key::End => Some(EditCommand::MoveToEnd),
    }
}

/// Decodes one raw input character into a key.
///
/// Used by the headless driver: `\n` and `\r` are Return, `\t` is Tab,
/// DEL and BS are Backspace, ESC is Escape.
pub fn key_from_char(ch: char) -> Key {
    match ch {
        '\n' | '\r' => Key::Return,
        '\t' => Key::Tab,
        '\u{7f}' | '\u{8}' => Key::Backspace,
        '\u{1b}' => Key::Escape,
        other => Key::Char(other),
    }
}

/// Executes a command against the buffer.
///
/// Cursor moves at the document boundaries are no-ops.
///
/// # Errors
///
/// Propagates [`BufferError`] from the buffer: `OutOfRange` for a
/// [`EditCommand::MoveTo`] past the end, `AllocationFailure` when an insert
/// cannot grow the buffer.
pub fn apply(buffer: &mut TextBuffer, command: EditCommand) -> Result<(), BufferError> {
    match command {
        EditCommand::InsertChar(ch) => buffer.insert_char(ch),
        EditCommand::InsertNewline => buffer.insert_char('\n'),
        EditCommand::InsertTab => buffer.insert_char('\t'),
        EditCommand::DeleteBackward => {
            if buffer.delete_char_before_cursor().is_none() {
                debug!("backspace at start of document");
            }
            Ok(())
        }
        EditCommand::DeleteForward => {
            if buffer.delete_char_after_cursor().is_none() {
                debug!("delete at end of document");
            }
            Ok(())
        }
        EditCommand::MoveLeft => buffer.move_cursor_to(buffer.cursor().saturating_sub(1)),
        EditCommand::MoveRight => {
            let target = (buffer.cursor() + 1).min(buffer.len());
            buffer.move_cursor_to(target)
        }
        EditCommand::MoveToStart => buffer.move_cursor_to(0),
        EditCommand::MoveToEnd => buffer.move_cursor_to(buffer.len()),
        EditCommand::MoveTo(offset) => buffer.move_cursor_to(offset),
    }
}

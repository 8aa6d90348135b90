// Chunk: docs/chunks/editor_view - Line layout, gutter and caret for the editor view
//!
//! parsec editor library.
//!
//! The editor is a thin consumer of `parsec-buffer`: it turns keystrokes into
//! buffer calls and turns buffer contents into laid-out lines with a
//! line-number gutter and a caret. Windowing, glyph rasterization and the
//! immediate-mode layout engine sit outside this crate.
//!
//! A typical frame:
//!
//! ```
//! use parsec_buffer::TextBuffer;
//! use parsec_editor::{apply, resolve_key, BumpArena, EditorConfig, EditorView, Key, Monospace};
//!
//! let config = EditorConfig::default();
//! let mut buffer = TextBuffer::with_config(config.gap);
//! let mut arena = BumpArena::with_capacity(config.frame_arena_bytes);
//! let mut view = EditorView::new(&config, Monospace::from_config(&config));
//! view.set_viewport_height(600.0);
//!
//! for key in [Key::Char('h'), Key::Char('i'), Key::Return] {
//!     if let Some(command) = resolve_key(key) {
//!         apply(&mut buffer, command).unwrap();
//!     }
//! }
//!
//! arena.reset();
//! let frame = view.layout(&buffer, &mut arena).unwrap();
//! assert_eq!(frame.line_count, 2);
//! assert_eq!(frame.caret.position.line, 1);
//! ```

pub mod arena;
pub mod command;
pub mod config;
mod error;
pub mod metrics;
pub mod view;

pub use arena::{Arena, ArenaError, ArenaSlot, BumpArena};
pub use command::{apply, key_from_char, resolve_key, EditCommand, Key};
pub use config::{config_file_path, ConfigError, EditorConfig};
pub use error::EditorError;
pub use metrics::{Monospace, TextMeasure};
pub use view::{Caret, EditorView, Frame, LineLayout};

//! Unicode style engine.
//!
//! Bold and italic are encoded directly in the character stream using the
//! Mathematical Sans-Serif letterforms, so styled text survives a plain-text
//! round trip (clipboard, chat, commit messages) without any attribute store.
//!
//! - [`classifier`]: which style a code point carries and its plain form
//! - [`transform`]: re-encoding single characters and whole strings

pub mod classifier;
pub mod transform;

pub use classifier::{
    classify, detect_style, is_styleable, supports, to_normal, Classification, StyleBit,
};
pub use transform::{apply, normalize, restyle, toggle, toggle_bold, toggle_italic};

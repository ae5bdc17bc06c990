//! Utility modules

pub mod file_validation;
pub mod markup;

pub use file_validation::{
    filename_for_display, is_likely_binary, validate_file_for_import, FileOpenError, ImportKind,
    MAX_FILE_SIZE,
};
pub use markup::{
    escape_attr, escape_text, plain_text_len, split_segments, strip_tags, DecodedText, Segment,
};

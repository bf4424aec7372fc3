//! Input definitions for on-disk locale sources.

pub mod locale_file;

//! Locale source file definitions
//!
//! One file per language, named `<prefix>.<language>.<ext>`, holding a
//! page → key → text table.

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

use crate::types::{
    LanguageCode,
    LocaleTable,
    StringTable,
};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    #[default]
    Toml,
    Json,
}

impl SourceFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// Builds the file name of a language's source.
///
/// # Examples
/// ```
/// use locale_store::input::locale_file::{SourceFormat, source_file_name};
///
/// assert_eq!(source_file_name("active", "fr", SourceFormat::Toml), "active.fr.toml");
/// ```
#[must_use]
pub fn source_file_name(prefix: &str, language: &str, format: SourceFormat) -> String {
    format!("{prefix}.{language}.{}", format.extension())
}

/// Extracts the language code from a source file name.
///
/// Inverse of [`source_file_name`]. Returns `None` for files that do not
/// follow the naming convention.
#[must_use]
pub fn language_from_file_name(
    prefix: &str,
    format: SourceFormat,
    file_name: &str,
) -> Option<LanguageCode> {
    let rest = file_name.strip_prefix(prefix)?.strip_prefix('.')?;
    let code = rest.strip_suffix(format.extension())?.strip_suffix('.')?;

    if code.is_empty() { None } else { Some(code.to_string()) }
}

/// Parses the content of a locale source.
///
/// The document must be a table of tables of strings. Anything else is
/// rejected with a reason naming the offending page or key.
///
/// # Errors
/// Syntax error, or a document of the wrong shape.
pub fn parse_locale_table(text: &str, format: SourceFormat) -> Result<LocaleTable, String> {
    let document: Value = match format {
        SourceFormat::Toml => toml::from_str(text).map_err(|e| format!("invalid TOML: {e}"))?,
        SourceFormat::Json => {
            serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}"))?
        }
    };

    let Value::Object(pages) = document else {
        return Err(format!("expected a table of pages, found {}", kind_of(&document)));
    };

    let mut table = LocaleTable::new();
    for (page, strings) in pages {
        let strings = match strings {
            Value::Object(strings) if !is_toml_datetime(&strings) => strings,
            other => {
                return Err(format!(
                    "page '{page}': expected a table of strings, found {}",
                    kind_of(&other)
                ));
            }
        };

        let mut page_table = StringTable::new();
        for (key, value) in strings {
            let Value::String(text) = value else {
                return Err(format!(
                    "page '{page}', key '{key}': expected a string, found {}",
                    kind_of(&value)
                ));
            };
            page_table.insert(key, text);
        }
        table.insert(page, page_table);
    }

    Ok(table)
}

/// Key under which TOML datetimes surface when deserialized into a [`Value`].
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

/// Whether a table is a TOML datetime in disguise.
fn is_toml_datetime(table: &Map<String, Value>) -> bool {
    table.len() == 1 && table.contains_key(TOML_DATETIME_FIELD)
}

/// Human readable name of a value kind.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Object(table) if is_toml_datetime(table) => "a datetime",
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}

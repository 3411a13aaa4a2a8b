//! Tabular section decoding.
//!
//! The kill-log and weapon-settings sections are comma-separated tables with
//! a header row and a variable number of fields per row. [`split_rows`] is a
//! small quote-aware reader (double-quoted cells, `""` escapes, embedded
//! commas and line breaks) feeding the two positional decoders below. Both
//! decoders skip row 0 unconditionally, so a header-only block decodes to
//! nothing without error.

use crate::models::{Kill, WeaponSettings};
use crate::parsers::error::ParseError;
use crate::parsers::fields::FieldValue;

/// Field count at which a weapon row carries the optional secondary block.
const WEAPON_OPTIONAL_THRESHOLD: usize = 7;

/// One data row of a tabular section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    #[cfg(test)]
    pub(crate) fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Coerce the cell at `position` to `T`, treating a missing cell as the
    /// empty string so absence and a bad value report identically.
    fn require<T: FieldValue>(&self, position: usize, column: &'static str) -> Result<T, ParseError> {
        let raw = self.fields.get(position).map(String::as_str).unwrap_or("");
        T::from_field(raw).ok_or_else(|| ParseError::Field {
            column: column.to_string(),
            value: raw.to_string(),
            expected: T::EXPECTED,
        })
    }

    /// Coerce the cell at `position`, falling back to the type's zero value
    /// when the cell is missing or unreadable.
    fn optional<T: FieldValue + Default>(&self, position: usize) -> T {
        self.fields.get(position).and_then(|raw| T::from_field(raw)).unwrap_or_default()
    }

    /// Free-text cell; missing cells read as empty.
    fn text(&self, position: usize) -> String {
        self.fields.get(position).cloned().unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.fields.len()
    }
}

enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteEnd,
}

/// Read a block as comma-separated rows.
///
/// Rows end at a line break (CRLF or bare LF), blank lines carry no record,
/// and rows may differ in field count. A cell starting with `"` runs to the
/// matching closing quote and may contain commas, line breaks and escaped
/// (`""`) quotes.
pub fn split_rows(block: &str) -> Result<Vec<Row>, ParseError> {
    let mut rows: Vec<Row> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;
    let mut chars = block.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::FieldStart => match ch {
                '"' => state = State::Quoted,
                ',' => fields.push(String::new()),
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    if !fields.is_empty() {
                        // Line ended on a comma: close the empty trailing cell.
                        fields.push(String::new());
                        rows.push(Row { fields: std::mem::take(&mut fields) });
                    }
                }
                _ => {
                    field.push(ch);
                    state = State::Unquoted;
                }
            },
            State::Unquoted => match ch {
                ',' => {
                    fields.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    fields.push(std::mem::take(&mut field));
                    rows.push(Row { fields: std::mem::take(&mut fields) });
                    state = State::FieldStart;
                }
                _ => field.push(ch),
            },
            State::Quoted => match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        state = State::QuoteEnd;
                    }
                }
                _ => field.push(ch),
            },
            State::QuoteEnd => match ch {
                ',' => {
                    fields.push(std::mem::take(&mut field));
                    state = State::FieldStart;
                }
                '\r' | '\n' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    fields.push(std::mem::take(&mut field));
                    rows.push(Row { fields: std::mem::take(&mut fields) });
                    state = State::FieldStart;
                }
                other => {
                    return Err(ParseError::Table {
                        reason: format!(
                            "unexpected character '{}' after closing quote in row {}",
                            other,
                            rows.len() + 1
                        ),
                    });
                }
            },
        }
    }

    match state {
        State::Quoted => {
            return Err(ParseError::Table {
                reason: format!("unterminated quoted field in row {}", rows.len() + 1),
            });
        }
        State::FieldStart => {
            if !fields.is_empty() {
                fields.push(field);
                rows.push(Row { fields });
            }
        }
        State::Unquoted | State::QuoteEnd => {
            fields.push(field);
            rows.push(Row { fields });
        }
    }

    Ok(rows)
}

/// Decode the weapon-settings section (the second block of the file).
///
/// Returns `Ok(None)` when the block holds no data row (empty block or header
/// only). When several data rows are present the last one wins.
pub fn decode_weapon_settings(block: &str) -> Result<Option<WeaponSettings>, ParseError> {
    let rows = split_rows(block)?;
    let mut settings = None;

    for row in rows.iter().skip(1) {
        let mut decoded = WeaponSettings {
            weapon: row.text(0),
            shots: row.require(1, "Shots")?,
            hits: row.require(2, "Hits")?,
            damage_done: row.require(3, "Damage Done")?,
            damage_possible: row.require(4, "Damage Possible")?,
            ..WeaponSettings::default()
        };

        // The secondary block only exists on some scenarios; unreadable
        // cells keep their zero value instead of failing the section.
        if row.len() >= WEAPON_OPTIONAL_THRESHOLD {
            decoded.horiz_sens = row.optional(7);
            decoded.vert_sens = row.optional(8);
            decoded.fov = row.optional(9);
            decoded.hide_gun = row.optional(10);
            decoded.crosshair_scale = row.optional(12);
            decoded.ads_sens = row.optional(14);
            decoded.ads_zoom_scale = row.optional(15);
        }

        settings = Some(decoded);
    }

    Ok(settings)
}

/// Decode the kill-log section (the first block of the file).
///
/// Every data row becomes one [`Kill`]; a failure on any required cell fails
/// the whole section.
pub fn decode_kills(block: &str) -> Result<Vec<Kill>, ParseError> {
    let rows = split_rows(block)?;
    let mut kills = Vec::new();

    for row in rows.iter().skip(1) {
        kills.push(Kill {
            kill_number: row.require(0, "Kill #")?,
            timestamp: row.text(1),
            bot: row.text(2),
            weapon: row.text(3),
            ttk: row.text(4),
            shots: row.require(5, "Shots")?,
            hits: row.require(6, "Hits")?,
            accuracy: row.require(7, "Accuracy")?,
            damage_done: row.require(8, "Damage Done")?,
            damage_possible: row.require(9, "Damage Possible")?,
            efficiency: row.require(10, "Efficiency")?,
            cheated: row.require(11, "Cheated")?,
        });
    }

    Ok(kills)
}

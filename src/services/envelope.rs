// ABOUTME: Escape-safe delimited encoding of a recipe for translation round-trips
// ABOUTME: Replaces the ad hoc string delimiters of earlier revisions with explicit escaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Envelope
//!
//! The recipe aggregator sends a whole recipe through the translation
//! provider as one string and must reassemble `{title, instructions,
//! ingredients}` from the translated text. Earlier revisions of this
//! service used bare delimiter sequences (`&&&`, `$$$`, later `<§§§>`
//! and `<<|>>`) and broke whenever recipe text happened to contain one.
//!
//! This module keeps the delimiter framing but escapes every delimiter
//! occurrence (and the escape character itself) inside field text, so
//! the round-trip is exact for ALL inputs. Decoding tolerates the
//! whitespace and decimal-separator changes translation providers are
//! known to introduce around the framing.

use diario_core::models::{Recipe, RecipeIngredient};
use thiserror::Error;

/// Separates the three top-level fields: title, instructions, ingredients
const FIELD_DELIMITER: &str = "<§§§>";

/// Separates ingredients from each other
const ITEM_DELIMITER: &str = "<<|>>";

/// Separates name, quantity, and unit within one ingredient
const PART_DELIMITER: &str = "<|:|>";

/// Escape lead character
const ESCAPE: char = '~';

/// Errors produced when a translated envelope cannot be reassembled
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The field delimiter did not split the text into exactly three fields
    #[error("expected 3 envelope fields, found {0}")]
    FieldCount(usize),

    /// An ingredient item did not split into name, quantity, and unit
    #[error("malformed ingredient item: {0}")]
    MalformedIngredient(String),

    /// An ingredient quantity did not parse as a number
    #[error("invalid ingredient quantity: {0}")]
    InvalidQuantity(String),
}

/// Escape delimiter sequences and the escape character in field text
fn escape(text: &str) -> String {
    text.replace(ESCAPE, "~0")
        .replace(FIELD_DELIMITER, "~1")
        .replace(ITEM_DELIMITER, "~2")
        .replace(PART_DELIMITER, "~3")
}

/// Reverse `escape`, leaving unrecognized escape pairs untouched
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push(ESCAPE),
            Some('1') => out.push_str(FIELD_DELIMITER),
            Some('2') => out.push_str(ITEM_DELIMITER),
            Some('3') => out.push_str(PART_DELIMITER),
            Some(other) => {
                out.push(ESCAPE);
                out.push(other);
            }
            None => out.push(ESCAPE),
        }
    }
    out
}

/// Encode a recipe into one translatable string
#[must_use]
pub fn encode(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| {
            format!(
                "{}{PART_DELIMITER}{}{PART_DELIMITER}{}",
                escape(&i.name),
                i.quantity,
                escape(&i.unit)
            )
        })
        .collect::<Vec<_>>()
        .join(ITEM_DELIMITER);

    format!(
        "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
        escape(&recipe.title),
        escape(&recipe.instructions),
        ingredients
    )
}

/// Decode a (possibly translated) envelope back into a recipe
///
/// # Errors
///
/// Returns an `EnvelopeError` when the framing was corrupted, e.g. by a
/// translation provider rewriting a delimiter sequence.
pub fn decode(text: &str) -> Result<Recipe, EnvelopeError> {
    let fields: Vec<&str> = text.split(FIELD_DELIMITER).collect();
    if fields.len() != 3 {
        return Err(EnvelopeError::FieldCount(fields.len()));
    }

    let title = unescape(fields[0].trim());
    let instructions = unescape(fields[1].trim());

    let ingredients_blob = fields[2].trim();
    let mut ingredients = Vec::new();
    if !ingredients_blob.is_empty() {
        for item in ingredients_blob.split(ITEM_DELIMITER) {
            let parts: Vec<&str> = item.split(PART_DELIMITER).collect();
            if parts.len() != 3 {
                return Err(EnvelopeError::MalformedIngredient(item.trim().to_owned()));
            }

            // Translators localize decimal separators ("1.5" -> "1,5")
            let quantity_text = parts[1].trim().replace(',', ".");
            let quantity: f64 = quantity_text
                .parse()
                .map_err(|_| EnvelopeError::InvalidQuantity(quantity_text.clone()))?;

            ingredients.push(RecipeIngredient {
                name: unescape(parts[0].trim()),
                quantity,
                unit: unescape(parts[2].trim()),
            });
        }
    }

    Ok(Recipe {
        title,
        instructions,
        ingredients,
    })
}

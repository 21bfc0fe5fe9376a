// File:    page_builder.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Composes sampled symbols into groups, rows, messages, and full pad pages.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::{PadError, PadResult};
use crate::symbol_source::SymbolSource;
use log::debug;
use serde::{Deserialize, Serialize};

/// Dimensions of a generated pad page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageLayout {
    /// Number of messages on the page.
    pub message_count: usize,
    /// Number of rows in each message.
    pub row_count: usize,
    /// Number of symbol groups in each row.
    pub group_count: usize,
    /// Number of symbols in each group.
    pub group_size: usize,
}

impl Default for PageLayout {
    /// The cheat-sheet layout: 9 messages of 4 rows, 20 groups of 5 symbols.
    fn default() -> Self {
        Self {
            message_count: 9,
            row_count: 4,
            group_count: 20,
            group_size: 5,
        }
    }
}

impl PageLayout {
    /// Checks that every dimension is a positive count.
    ///
    /// Runs before any entropy is consumed so that a bad layout can never
    /// fail mid-page.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Configuration`] naming the offending dimension.
    pub fn validate(&self) -> PadResult<()> {
        for (name, value) in [
            ("message_count", self.message_count),
            ("row_count", self.row_count),
            ("group_count", self.group_count),
            ("group_size", self.group_size),
        ] {
            if value == 0 {
                return Err(PadError::Configuration(format!(
                    "{name} must be at least 1"
                )));
            }
        }
        Ok(())
    }
}

/// A single numbered key block on a generated page.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// One-based position of the message on its page, in generation order.
    pub ordinal: usize,
    /// The message body: rows of space-separated symbol groups.
    pub text: String,
}

/// One full sheet of freshly generated key material.
///
/// A page is an ephemeral value: it is built for a single caller, rendered
/// once, and dropped. Nothing is stored or retrievable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// The numbered messages, in generation order.
    pub messages: Vec<Message>,
}

/// Draws `group_size` symbols into one transcription group, preserving draw
/// order.
///
/// Expects `group_size >= 1`; callers validate dimensions up front via
/// [`PageLayout::validate`].
///
/// # Errors
///
/// Propagates any failure from the symbol source unchanged.
pub fn build_group<S: SymbolSource>(source: &mut S, group_size: usize) -> PadResult<String> {
    let mut group = String::with_capacity(group_size);
    for _ in 0..group_size {
        group.push(source.sample()?);
    }
    Ok(group)
}

/// Builds `group_count` groups separated by single spaces, with no leading
/// or trailing delimiter.
///
/// # Errors
///
/// Propagates any failure from the symbol source unchanged.
pub fn build_row<S: SymbolSource>(
    source: &mut S,
    group_count: usize,
    group_size: usize,
) -> PadResult<String> {
    let mut groups = Vec::with_capacity(group_count);
    for _ in 0..group_count {
        groups.push(build_group(source, group_size)?);
    }
    Ok(groups.join(" "))
}

/// Builds `row_count` rows joined by line breaks, with no trailing break.
///
/// # Errors
///
/// Propagates any failure from the symbol source unchanged.
pub fn build_message<S: SymbolSource>(
    source: &mut S,
    row_count: usize,
    group_count: usize,
    group_size: usize,
) -> PadResult<String> {
    let mut rows = Vec::with_capacity(row_count);
    for _ in 0..row_count {
        rows.push(build_row(source, group_count, group_size)?);
    }
    Ok(rows.join("\n"))
}

/// Generates one complete pad page.
///
/// Messages are numbered `1..=message_count` in generation order. Every
/// symbol on the page is drawn independently from the source; a partially
/// built page is simply discarded on failure.
///
/// # Errors
///
/// Returns [`PadError::Configuration`] if a layout dimension is zero, or
/// [`PadError::Generation`] if the secure random source fails.
pub fn generate_page<S: SymbolSource>(source: &mut S, layout: &PageLayout) -> PadResult<Page> {
    layout.validate()?;

    let mut messages = Vec::with_capacity(layout.message_count);
    for ordinal in 1..=layout.message_count {
        messages.push(Message {
            ordinal,
            text: build_message(
                source,
                layout.row_count,
                layout.group_count,
                layout.group_size,
            )?,
        });
    }

    debug!("generated page with {} messages", messages.len());
    Ok(Page { messages })
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Writes engine results to the terminal, as text or as JSON.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tmz::{ConversionResult, ZoneId, ZoneSnapshot};

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Labeled lines for people.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl Output {
    /// Picks JSON when `json` is set and text otherwise.
    pub const fn new(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    /// Writes the time in one zone.
    pub fn snapshot(self, out: &mut impl Write, snapshot: &ZoneSnapshot) -> Result<()> {
        match self {
            Self::Json => json(out, snapshot),
            Self::Text => {
                writeln!(out, "{}", snapshot.zone())?;
                writeln!(out, "  Time:    {}", snapshot.formatted_time())?;
                writeln!(out, "  Date:    {}", snapshot.formatted_date())?;
                writeln!(out, "  Offset:  {}", snapshot.utc_offset_label())?;
                Ok(())
            }
        }
    }

    /// Writes both sides of a conversion and the offset difference. The text form notes when
    /// the target date differs from the source date.
    pub fn conversion(self, out: &mut impl Write, result: &ConversionResult) -> Result<()> {
        match self {
            Self::Json => json(out, result),
            Self::Text => {
                let day = match result.day_shift() {
                    0 => "",
                    1 => ", next day",
                    -1 => ", previous day",
                    2.. => ", days later",
                    _ => ", days earlier",
                };

                writeln!(out, "From:  {} ({})", result.formatted_source(), result.source_zone())?;
                writeln!(out, "To:    {} ({}{day})", result.formatted_target(), result.target_zone())?;
                writeln!(out, "{} is {} from {}", result.target_zone(), result.offset_difference(), result.source_zone())?;
                Ok(())
            }
        }
    }

    /// Writes suggested zone names, one per line in the text form.
    pub fn suggestions(self, out: &mut impl Write, zones: &[ZoneId]) -> Result<()> {
        match self {
            Self::Json => json(out, zones),
            Self::Text => {
                for zone in zones {
                    writeln!(out, "{zone}")?;
                }
                Ok(())
            }
        }
    }
}

fn json(out: &mut impl Write, value: &(impl Serialize + ?Sized)) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("cannot serialize the result")?;
    writeln!(out)?;
    Ok(())
}

//! JSON output utilities for CLI commands.
//!
//! This module provides:
//! - Shared event types for consistent JSON output (`events`)
//! - Helper functions for emitting NDJSON events
//!
//! ## Usage
//!
//! ```ignore
//! use crate::ui::json::{emit_event, events::*};
//!
//! emit_event(&StartEvent::new("quote"))?;
//! emit_event(&DataEvent::new("quote", "quote", &outcome))?;
//! emit_event(&CompleteEvent::success("quote"))?;
//! ```

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Write a typed event to a custom writer (one JSON object per line).
pub fn write_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

//! Protocol decoding modules.
//!
//! The flight-control frame follows a layered structure:
//! - `layout`: byte offsets, bit spans and wire constants (source of truth)
//! - `reader`: bounds-checked bit and byte access
//! - `validator`: structural checks and checksum, in a fixed order
//! - `parser`: field-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Everything here is pure and contains no I/O; sources and the analysis
//! layer handle file access and aggregation.

pub mod frame;

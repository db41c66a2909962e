//! Integration tests across all layers.
//!
//! Tests the path from raw input lines to rendered reports.

mod end_to_end;
mod properties;

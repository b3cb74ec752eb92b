//! Calendar primitives behind note naming.
//!
//! # Responsibility
//! - Render user-supplied date-token formats into daily filename stems.
//! - Stamp dates with the week/year pair used by weekly note names.
//!
//! # Invariants
//! - Everything here is pure; the host hands in the clock reading.
//!
//! # See also
//! - `path` for how stems become vault-relative paths.

pub mod date_format;
pub mod week;

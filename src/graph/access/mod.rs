//! Internal helpers shared by the backends.
//!
//! Kept `pub(crate)`: the checks return public error values but are not part
//! of the API surface themselves.

pub(crate) mod bounds;

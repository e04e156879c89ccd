//! Low-level helpers shared by the table modules.
pub(crate) mod order;
pub(crate) mod string;

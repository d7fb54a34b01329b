//! Schemas shared by the library tests.

pub(crate) mod starwars;

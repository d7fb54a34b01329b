//! Library tests and fixtures

mod fixtures;
mod printer_tests;
mod resolution_tests;
mod schema_tests;

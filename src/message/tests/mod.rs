//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering happy paths, error cases,
//! and edge cases for all public APIs.

mod attribute_tests;
mod box_tests;
mod bubble_tests;
mod carousel_tests;
mod fixtures;
mod quick_reply_tests;
mod text_tests;

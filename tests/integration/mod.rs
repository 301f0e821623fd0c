//! Integration tests for the VolunTrack server
//!
//! These tests drive the full router (auth layer included) against a
//! temporary SQLite database.

mod request_tests;

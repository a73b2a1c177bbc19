//! Integration tests against a live PostgreSQL database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

mod repository_tests;

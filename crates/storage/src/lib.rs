#![forbid(unsafe_code)]

//! Persistence for learner progress: the repository contract, an in-memory
//! implementation for tests, and the `SQLite` single-slot backend.

pub mod repository;
pub mod sqlite;

//! Dweetctl library - exposes modules for integration tests

pub mod card;

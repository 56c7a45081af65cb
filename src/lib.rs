//! Batch ingestion pipeline for money transfer uploads.
//!
//! An uploaded table goes through a header check, per-row field rules and,
//! only if every row passes, aggregation into a [`models::BatchTransfer`]
//! that is appended to a [`storage::TransferStore`].

pub mod config;
pub mod engine;
pub mod models;
pub mod storage;
pub mod types;
pub mod validation;

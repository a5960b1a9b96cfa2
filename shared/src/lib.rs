//! Core snippet-matching engine for the PDF facts extraction service,
//! plus the configuration, DTO, and error types shared with the HTTP
//! layer. The engine is pure and synchronous: given per-page text and
//! a list of pointer strings it produces a ranked snippet report
//! without performing any I/O.

pub mod config;
pub mod dto;
pub mod error;
pub mod matcher;
pub mod report;
pub mod segmenter;
pub mod similarity;

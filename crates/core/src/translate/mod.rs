//! Bidirectional record/feature translation

mod service;
pub mod temporal;

pub use service::RecordTranslator;

//! Cleans compressed CSV exports of a bank marketing campaign into three
//! normalized tables: client demographics, campaign interaction outcomes,
//! and macroeconomic indicators at time of contact.

pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod table;
pub mod transform;

pub use error::{EtlError, Result};

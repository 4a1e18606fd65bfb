//! Domain Models - The records a store keeps
//!
//! Every record type implements [`record::Record`]. Records with numeric
//! fields additionally implement [`record::Measured`] so they can be
//! queried by threshold.

pub mod product;
pub mod record;
pub mod task;

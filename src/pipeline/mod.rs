//! Sequential, error-isolating execution of enrichment operations.
//!
//! A [`Pipeline`] runs an ordered list of [`Operation`]s against an
//! [`EnrichmentContext`]. Operations run strictly one after another, since
//! later operations may read keys placed into the context by earlier ones.
//! A failing operation never aborts the pipeline: its error is recorded in
//! the context and the next operation runs.

mod context;
mod operation;
mod run;

pub use context::{
    EnrichmentContext, EnrichmentError, EnrichmentErrorKind, OperationStack, StackEntry,
};
pub use operation::Operation;
pub use run::Pipeline;

use super::context::{EnrichmentContext, EnrichmentError};
use super::operation::Operation;
use tracing::{debug, warn};

/// An ordered list of operations executed one at a time.
#[derive(Default)]
pub struct Pipeline<'a> {
    operations: Vec<Box<dyn Operation + 'a>>,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(operations: Vec<Box<dyn Operation + 'a>>) -> Self {
        Self { operations }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.operations.iter().map(|operation| operation.name()).collect()
    }

    /// Run every operation in order and return the accumulated context.
    ///
    /// Never fails: an operation error is appended to `context.errors`, noted
    /// on its stack entry, and the remaining operations still run.
    pub async fn run(&self, mut context: EnrichmentContext) -> EnrichmentContext {
        debug!(operations = self.operations.len(), "Running enrichment pipeline");
        for operation in &self.operations {
            context = run_operation(operation.as_ref(), context).await;
        }
        debug!(
            keys = context.data.len(),
            errors = context.errors.len(),
            "Enrichment pipeline finished"
        );
        context
    }
}

async fn run_operation(
    operation: &(dyn Operation + '_),
    mut context: EnrichmentContext,
) -> EnrichmentContext {
    let name = operation.name();
    let index = context.stack.start(name.clone());
    match operation
        .fetch(&context.data, &context.request_options)
        .await
    {
        Ok(fetched) => {
            context.extend(fetched);
            context.stack.finish(index, None);
        }
        Err(e) => {
            let message = format!("{name}: {e}");
            warn!(operation = %name, error = %e, "Enrichment operation failed");
            context.errors.push(EnrichmentError::other(message.clone()));
            context.stack.finish(index, Some(message));
        }
    }
    context
}

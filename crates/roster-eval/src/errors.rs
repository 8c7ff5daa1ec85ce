use thiserror::Error;

/// Errors emitted by the aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("cannot aggregate an empty dataset")]
    EmptyDataset,
}

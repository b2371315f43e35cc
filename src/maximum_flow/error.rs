use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("node `{0}` is already registered")]
    DuplicateNode(String),

    #[error("no such node: `{0}`")]
    NoSuchNode(String),

    #[error("node index {0} is out of range")]
    UnknownNode(usize),

    #[error("edge {from} -> {to} has a negative or undefined capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("residual edge {0} does not exist")]
    UnknownEdge(usize),

    #[error("source and sink are the same node ({0})")]
    SameEndpoints(usize),

    #[error("graph still carries flow from an earlier solve; call reset_flows first")]
    StaleFlow,

    #[error("stopped after {limit} augmentations")]
    AugmentationLimit { limit: usize },
}

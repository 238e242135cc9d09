use thiserror::Error;

/// Structural problems with an action, event or choice. The offending item is
/// dropped; the turn carries on without it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("action parameter has an empty key")]
    EmptyParameterKey,
    #[error("{what} has an empty {field}")]
    EmptyText { what: &'static str, field: &'static str },
    #[error("effect on {key} of {delta} exceeds the allowed magnitude")]
    EffectTooLarge { key: String, delta: i32 },
    #[error("choice tree is {depth} steps deep, at most {max} allowed")]
    ChoiceTooDeep { depth: usize, max: usize },
}

/// A selection path that does not lead to a final choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("no choice was selected")]
    EmptyPath,
    #[error("choice {index} at step {step} is out of range ({available} options)")]
    OutOfRange {
        step: usize,
        index: usize,
        available: usize,
    },
    #[error("choice at step {step} needs a further selection")]
    Incomplete { step: usize },
}

/// Failures of the persistence hook.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    #[error("serialization error")]
    Json(#[from] serde_json::Error),
    #[error("store rejected commit: {0}")]
    Rejected(String),
}

/// Errors surfaced to the caller of the turn engine.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("no active game")]
    NoActiveGame,
    #[error("game already ended at cycle {cycle}")]
    GameOver { cycle: u32 },
    #[error("a resolved turn is waiting to be committed")]
    CommitPending,
    #[error("no resolved turn is waiting to be committed")]
    NothingToCommit,
    #[error("no choice is waiting to be resolved")]
    NoPendingChoice,
    #[error(transparent)]
    Choice(#[from] ChoiceError),
    #[error("choice failed validation")]
    InvalidChoice(#[source] ValidationError),
    #[error("failed to persist game state")]
    Persistence(#[from] PersistError),
}

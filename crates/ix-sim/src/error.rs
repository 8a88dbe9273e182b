use ix_core::{IxError, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] IxError),

    #[error("report sink failed at {tick}; run aborted")]
    SinkFailed { tick: Tick },
}

pub type SimResult<T> = Result<T, SimError>;

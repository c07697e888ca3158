use thiserror::Error;

/// Errors surfaced while dispatching callbacks for a frame
///
/// None of these abort the frame: the failing callback is skipped and the
/// remaining callbacks still run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Callback #{index} for '{event}' panicked: {message}")]
    CallbackPanicked {
        event: String,
        index: usize,
        message: String,
    },

    #[error("Callback #{index} for '{event}' is already running")]
    CallbackBusy { event: String, index: usize },
}

pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

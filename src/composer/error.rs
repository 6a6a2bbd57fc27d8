//! Composer error taxonomy.
//!
//! Generator failures are deliberately absent here: they degrade the request
//! to the offline path instead of surfacing as errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    /// The task description was empty or whitespace. Every other request
    /// field has a default, so this is the only way a request can be invalid.
    #[error("task description must not be empty")]
    EmptyTask,
}

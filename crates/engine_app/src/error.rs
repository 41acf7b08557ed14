//! Failure classes of the host application.

use engine_component::ComponentError;

/// Errors that end the application with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The windowing backend could not create the window or renderer.
    #[error("failed to create window/renderer: {0}")]
    ExternalInit(String),

    /// The entity could not be updated or drawn.
    #[error("frame {tick_id} failed")]
    Frame {
        tick_id: u64,
        #[source]
        source: ComponentError,
    },
}

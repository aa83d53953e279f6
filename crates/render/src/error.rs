use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The device owning the requested resource has been disposed.
    /// Raised eagerly, on the call that touches the dead device, not
    /// deferred to some later drawing operation.
    #[error("rendering target is disposed")]
    TargetDisposed,

    /// A resource description that can never be satisfied, such as a
    /// font with an empty family name or a color with an out-of-range
    /// opacity.
    #[error("invalid {kind} description: {message}")]
    InvalidDescription {
        kind: &'static str,
        message: String,
    },

    #[error("render backend '{backend}' failed: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaserError {
    /// No usable GPU context, adapter, device or surface at initialize time.
    #[error("renderer setup failed: {0}")]
    Setup(String),

    /// A frame could not be drawn or presented (device or surface lost).
    #[error("frame draw failed: {0}")]
    Draw(String),
}

pub type Result<T> = std::result::Result<T, LaserError>;

// One error type for the whole crate.
// Every variant states *where* things went wrong.
// Drawing never fails: off-canvas input is clipped, not reported.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The canvas has no pixels, or is too large to address.
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid color '{0}': expected #rrggbb")]
    ParseColor(String),

    // Creating the window failed
    #[error("window init error: {0}")]
    WindowInit(String),

    // Pushing a frame to the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String),

    #[error("export error: {0}")]
    Export(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

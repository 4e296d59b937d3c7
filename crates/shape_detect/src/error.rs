use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    /// Empty payload, undecodable bytes, unsupported format or zero dimensions.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShapeError>;

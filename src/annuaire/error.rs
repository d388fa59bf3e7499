use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnuaireError {
    #[error("administrator access required")]
    AdminRequired,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported image format: {0}")]
    UnsupportedImage(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AnnuaireError>;

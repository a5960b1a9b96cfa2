use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Management session error: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

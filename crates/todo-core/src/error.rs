use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }
}

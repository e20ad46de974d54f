use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Missing argument: <{0}>")]
    MissingArgument(&'static str),

    #[error("Invalid task id: {0}")]
    InvalidId(String),

    #[error("Remote backend is not available yet ({0}). Use `wyd set --local` instead.")]
    RemoteUnsupported(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::EmptyDescription => "EmptyDescription",
            Error::MissingArgument(_) => "MissingArgument",
            Error::InvalidId(_) => "InvalidId",
            Error::RemoteUnsupported(_) => "RemoteUnsupported",
            Error::Db(_) => "Db",
            Error::Io(_) => "Io",
            Error::Json(_) => "Json",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

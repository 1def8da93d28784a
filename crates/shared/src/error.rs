/// Errors crossing crate boundaries.
///
/// `Validate` carries a message meant for the visitor and is surfaced as is.
/// Everything else is reported with a generic message and logged in full.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validate(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

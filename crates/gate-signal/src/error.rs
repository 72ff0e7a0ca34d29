use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("descriptor parse error on line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("checkpoint at position {position} has height {height}; height must be >= 2")]
    InvalidHeight { position: u64, height: u64 },

    #[error("checkpoint at position {position} has height {height}; period 2*(height-1) overflows u64")]
    PeriodOverflow { position: u64, height: u64 },

    #[error("periodic signal cycle must be non-empty")]
    EmptyCycle,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SignalResult<T> = Result<T, SignalError>;

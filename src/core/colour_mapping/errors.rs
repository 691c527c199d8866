use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionColourMapError {
    OutOfRange { t: f64 },
    NonFinite { t: f64 },
}

impl fmt::Display for TransitionColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { t } => {
                write!(f, "transition position {} is outside [0, 1]", t)
            }
            Self::NonFinite { t } => {
                write!(f, "transition position {} is not a finite number", t)
            }
        }
    }
}

impl Error for TransitionColourMapError {}

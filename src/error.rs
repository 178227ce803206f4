use std::fmt;

/// Turn angle in degrees which is not a multiple of 90.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct UnevenTurn(pub i32);

impl fmt::Display for UnevenTurn {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            fmt,
            "not expecting turns of uneven degrees: {} is not a multiple of 90",
            self.0
        )
    }
}

impl std::error::Error for UnevenTurn {}

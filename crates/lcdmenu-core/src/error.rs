//! Error taxonomy: [`MenuError`], [`MenuResult`].

use thiserror::Error;

use crate::driver::DriverError;

/// Convenience alias used throughout the crate.
pub type MenuResult<T> = Result<T, MenuError>;

/// Everything that can go wrong inside the menu core.
#[derive(Error, Debug)]
pub enum MenuError {
    /// A line write outside `1..=LINES`. The buffer is left untouched.
    #[error("line {line} out of range, display has {max} lines")]
    LineOutOfRange { line: usize, max: usize },

    /// A selected item does not override the named capability.
    #[error("menu item does not implement `{0}`")]
    Unimplemented(&'static str),

    /// A failure reported by the display or button hardware.
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),
}

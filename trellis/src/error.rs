//! Shell error type.
//!
//! The layout core never fails; errors only arise at the terminal boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal reports unusable size {width}x{height}")]
    TerminalSize { width: u16, height: u16 },
}

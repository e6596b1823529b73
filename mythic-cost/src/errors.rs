use std::path::PathBuf;

use thiserror::Error;

pub type DeployCostResult<T> = std::result::Result<T, DeployCostError>;

#[derive(Error, Debug)]
pub enum DeployCostError {
    #[error("IoError: '{0}' ({0:?})")]
    IoError(#[from] std::io::Error),

    #[error("Program binary '{}' is empty", .0.display())]
    EmptyProgramBinary(PathBuf),
}

use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("File is not valid UTF-8 and could not be decoded as GBK: {0}")]
    MalformedEncoding(PathBuf),

    #[error("Buffer is not valid UTF-8 and could not be decoded as GBK")]
    MalformedBuffer,

    #[error("{directive} directive is not valid for the {target}")]
    InvalidTarget {
        directive: &'static str,
        target: &'static str,
    },

    #[error("Malformed {keyword} directive: {payload:?}")]
    MalformedDirective { keyword: &'static str, payload: String },
}

pub type CueResult<T> = result::Result<T, CueError>;

use crate::AlphaKeyError;

pub type Result<T> = std::result::Result<T, AlphaKeyError>;

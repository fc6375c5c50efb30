// src/cli.rs
//! Positional argument handling for the command-line tools.
//!
//! Only the argument count is validated here; malformed keys and addresses
//! are left to the parsers, which fail with a format error.

use crate::error::{KycError, KycResult};
use std::ffi::OsString;

pub const SIGN_USAGE: &str = "Usage: sign <BACKEND_PK> <USER_ADDR> <DNI>";
pub const BACKEND_ADDRESS_USAGE: &str = "Usage: backend_address <BACKEND_PK>";

/// Converts raw `argv` into strings. Arguments that are not valid UTF-8 are
/// a usage error, reported with their lossy form.
pub fn collect_args<I>(args: I) -> KycResult<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                KycError::Usage(format!(
                    "argument is not valid UTF-8: {}",
                    arg.to_string_lossy()
                ))
            })
        })
        .collect()
}

/// Arguments of the `sign` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignArgs {
    pub backend_pk: String,
    pub user_addr: String,
    pub dni: String,
}

impl SignArgs {
    /// Parses `argv`, program name included.
    pub fn from_args(args: &[String]) -> KycResult<Self> {
        match args {
            [_, backend_pk, user_addr, dni] => Ok(SignArgs {
                backend_pk: backend_pk.clone(),
                user_addr: user_addr.clone(),
                dni: dni.clone(),
            }),
            _ => Err(KycError::Usage(SIGN_USAGE.to_string())),
        }
    }
}

/// Parses the single `<BACKEND_PK>` argument of `backend_address`.
pub fn backend_key_arg(args: &[String]) -> KycResult<String> {
    match args {
        [_, backend_pk] => Ok(backend_pk.clone()),
        _ => Err(KycError::Usage(BACKEND_ADDRESS_USAGE.to_string())),
    }
}

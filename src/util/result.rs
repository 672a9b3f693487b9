// SPDX-License-Identifier: Unlicense

//! Uniform structure for errors and results.

/// Specified errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A configured table exceeds a fixed or hardware-discovered limit.
    OutOfRange,
}

/// Default error type for firmware functions.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok_eq};

    use super::*;

    #[test]
    fn return_error() {
        fn fn_ok() -> Result<f64> {
            Ok(1.0)
        }

        fn fn_error() -> Result<f64> {
            Err(Error::OutOfRange)
        }

        fn fn_qmark() -> Result<f64> {
            fn_error()?;
            Ok(1.0)
        }

        assert_ok_eq!(fn_ok(), 1.0);
        assert_err!(fn_error());
        assert_err!(fn_qmark());
    }
}

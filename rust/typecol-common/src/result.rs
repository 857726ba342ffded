pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_index {
    ($pos:expr, $len:expr) => {{
        $crate::result::verify_index($pos, $len)?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

/// Checks that `pos` addresses an existing element of a sequence of length `len`.
#[inline]
pub fn verify_index(pos: usize, len: usize) -> Result<()> {
    if pos < len {
        Ok(())
    } else {
        index_out_of_range(pos, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn index_out_of_range(position: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::IndexOutOfRange { position, len }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(threshold: f64) -> Result<f64> {
        crate::verify_arg!(threshold, threshold > 0.0 && threshold <= 1.0);
        Ok(threshold)
    }

    fn checked_pos(pos: usize, len: usize) -> Result<usize> {
        crate::verify_index!(pos, len);
        Ok(pos)
    }

    #[test]
    fn test_verify_arg() {
        assert!(checked(0.5).is_ok());
        let err = checked(1.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument threshold: threshold > 0.0 && threshold <= 1.0"
        );
    }

    #[test]
    fn test_verify_index() {
        assert_eq!(checked_pos(0, 1).unwrap(), 0);
        assert!(checked_pos(1, 1).unwrap_err().is_index_out_of_range());
        assert!(checked_pos(0, 0).unwrap_err().is_index_out_of_range());
    }
}

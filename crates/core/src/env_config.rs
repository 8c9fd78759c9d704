//! Numeric settings read from the environment, such as
//! `RECIPEBOX_DB_POOL_SIZE`.

/// Parse `var` as `T`, falling back to `default` when it is unset or
/// unparsable (the latter with a warning).
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "RECIPEBOX_TEST_ENV_VALID_41823";
        unsafe { std::env::set_var(var_name, "6") };
        let result: u32 = env_parse_with_default(var_name, 4);
        assert_eq!(result, 6);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "RECIPEBOX_TEST_ENV_INVALID_41824";
        unsafe { std::env::set_var(var_name, "lots") };
        let result: u32 = env_parse_with_default(var_name, 4);
        assert_eq!(result, 4);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let result: u32 = env_parse_with_default("RECIPEBOX_TEST_ENV_MISSING_41825", 4);
        assert_eq!(result, 4);
    }
}

//! Error handling in the apps built on this crate is string based, this
//! module provides the glue to get there from arbitrary error types.

/// Turn a `Result<T, E>` into a `Result<T, String>`, prefixing the rendered
/// error with some context.
pub trait ErrorStringExt<T> {
    fn err_to_string(self, context: &str) -> Result<T, String>;
}

impl<T, E: std::fmt::Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, context: &str) -> Result<T, String> {
        self.map_err(|err| format!("{}: {}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_prefixed() {
        let res: Result<i64, std::num::ParseIntError> = "abc".parse();
        let msg = res.err_to_string("could not parse count").unwrap_err();
        assert!(msg.starts_with("could not parse count: "));
    }
}

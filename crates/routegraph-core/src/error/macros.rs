//! Error macros for routegraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RouteError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a malformed script line
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::RouteError::script_parse($line, format!($($arg)*)))
    };
}

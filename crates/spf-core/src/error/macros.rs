//! Error macros for spf

/// Macro for returning an invalid endpoint error
#[macro_export]
macro_rules! bail_endpoint {
    ($name:expr) => {
        return Err($crate::error::SpfError::invalid_endpoint($name))
    };
}

//! Error macros for ruta

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RutaError::invalid_value($context, $value))
    };
}

/// Macro for bailing out on an out-of-range vertex index
#[macro_export]
macro_rules! ensure_index {
    ($index:expr, $count:expr) => {
        if $index >= $count {
            return Err($crate::error::RutaError::invalid_index($index, $count));
        }
    };
}

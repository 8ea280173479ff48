
pub use anyhow::{anyhow, Context, Result};

///
/// Builds an ad-hoc error value from format-style arguments.
///
#[macro_export]
macro_rules! error
{
    ($($args:tt)*) =>
    {
        $crate::error::anyhow!($($args)*)
    };
}

pub use error;

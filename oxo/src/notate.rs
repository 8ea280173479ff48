
use utils::*;

///
/// A trait representing the concept of canonical notation.
///
/// An implementor provides a canonical notation by way of notate(), and
/// recognizes potentially non-canonical notation by way of parse(). The
/// notation is the compact form used in log lines and test positions, not
/// the rendering players see.
///
pub trait Notate
    where Self: Sized
{
    ///
    /// Returns the canonical notational string for this object.
    ///
    fn notate (& self) -> String;

    ///
    /// Constructs a new object from the given notational string, provided
    /// that the notation is valid.
    ///
    fn parse (s: & str) -> Result<Self>;
}

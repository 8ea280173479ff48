
use oxo::Reader;

use utils::*;

///
/// A reader that takes submitted lines from standard input.
///
/// A read of zero bytes is end of input, and a read error is treated the
/// same way after a note in the log; in either case the session winds down
/// without any further message.
///
pub struct Input;

impl Reader for Input
{
    fn next_line (& mut self) -> Option<String>
    {
        let mut line = String::new();

        match std::io::stdin().read_line(& mut line)
        {
            Ok(0)      => None,
            Ok(_)      => Some(line),
            Err(error) =>
            {
                log::warn!("Failed to read from stdin: {}.", error);
                None
            }
        }
    }
}

impl Input
{
    ///
    /// Returns a new reader over standard input.
    ///
    pub fn new () -> Input
    {
        Input
    }
}

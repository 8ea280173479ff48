
pub mod cell;
pub mod error;
pub mod game;
pub mod grid;
pub mod label;
pub mod lines;
pub mod notate;
pub mod outcome;
pub mod player;
pub mod point;
pub mod session;

pub use cell::Cell;
pub use error::Error;
pub use game::Game;
pub use grid::Grid;
pub use outcome::Outcome;
pub use player::Player;
pub use point::Point;
pub use session::{Presenter, Reader, Session};

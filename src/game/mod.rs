pub mod dominance;
pub use dominance::*;

pub mod game;
pub use game::*;

pub mod support;
pub use support::*;

pub mod tensor;
pub use tensor::*;

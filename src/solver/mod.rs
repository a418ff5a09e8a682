pub mod newton;
pub use newton::*;

pub mod roots;
pub use roots::*;

pub mod solver;
pub use solver::*;

mod algorithm;
mod dot;
mod hyperparams;
pub mod impurity;
mod iter;
mod split;

pub use algorithm::*;
pub use dot::*;
pub use hyperparams::*;
pub use iter::*;
pub use split::*;

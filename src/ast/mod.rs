mod node;
mod span;

pub use node::Node;
pub use span::{Loc, Position};

pub mod build;
pub mod model;
pub mod node;

pub use build::TreeBuilder;
pub use model::*;
pub use node::*;

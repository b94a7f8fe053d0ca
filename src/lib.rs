pub mod flint;
pub mod lower;
pub mod resolve;
pub mod tree;

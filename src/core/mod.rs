pub mod logspace;
pub mod tradeoff;

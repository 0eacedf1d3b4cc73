pub mod bridge;
pub mod combinators;
pub mod derived;
pub mod laws;
pub mod ops;
pub mod order;
pub mod ordered;
pub mod policy;
pub mod primitive;
pub mod registry;

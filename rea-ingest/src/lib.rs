pub mod aggregate;
pub mod collect;
pub mod normalize;
pub mod soda;
pub mod sources;

pub mod deterministic;
pub mod normalize;

pub use deterministic::geocode;
pub use normalize::build_query;

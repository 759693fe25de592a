pub mod center;

pub use center::{map_center, map_center_or};

pub mod address;
pub mod fixed;
pub mod location;

pub use address::{GeocodeInput, ProfileAddress};
pub use fixed::{round_fixed, to_fixed};
pub use location::{GeocodeResult, SessionLocation, format_coordinate};

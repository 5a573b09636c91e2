pub mod constants;
pub mod consent;
pub mod error;
pub mod roster;
pub mod shared_name_wheel;
pub mod storage;
pub mod tip_calculator;
pub mod validation;
pub mod wheel_geometry;

pub use error::{StorageError, WheelError};
pub use roster::Roster;
pub use shared_name_wheel::{SpinResult, WheelConfig, WheelSpinState};
pub use wheel_geometry::{compute_slices, Slice, WheelLayout};

//! Design parameters for the star-ornament lampshade and the rules that keep
//! them printable and compatible with the fixed mount.

pub mod constraints;
pub mod design_file;
pub mod mount;
pub mod params;
pub mod random;
pub mod ranges;

pub use constraints::{DerivedGeometry, FEATURE_DEPTH_MAX_MAX};
pub use mount::MountGeometry;
pub use params::DesignParameters;
pub use ranges::{Bounds, ParameterRanges};

pub use shade_geometry::{DesignMode, Interpolation};

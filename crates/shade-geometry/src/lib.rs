//! Star-shade geometry: radial profiles, surface patterns, and the sampled
//! surfaces of the shade body, transition collar, and mount sleeve.

pub mod circle;
pub mod noise;
pub mod pattern;
pub mod profile;
pub mod sample;
pub mod surface;

pub use circle::Circle;
pub use pattern::{DesignMode, Pattern};
pub use profile::{Interpolation, Profile};
pub use sample::{sample_grid, try_sample_grid, RowOrder, VertexGrid};
pub use surface::Surface;

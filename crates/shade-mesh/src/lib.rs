pub mod assemble;
pub mod facet;
pub mod generate;
pub mod stl;
pub mod triangulate;

pub use assemble::{facet_count_for_detail, LampshadeMesh, Section};
pub use facet::Facet;
pub use generate::{generate, generate_with};
pub use stl::{export, write_stl};
pub use triangulate::TriangleMesh;

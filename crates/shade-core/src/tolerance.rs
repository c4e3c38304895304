/// Tolerances for comparing sampled geometry.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (millimetres)
    pub linear: f64,
    /// Tolerance for unit-length checks on normals
    pub unit: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_UNIT: f64 = 1e-5;

    pub fn new(linear: f64, unit: f64) -> Self {
        Self { linear, unit }
    }

    pub fn default_precision() -> Self {
        Self::new(Self::DEFAULT_LINEAR, Self::DEFAULT_UNIT)
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }

    /// Check if a length is one within the unit tolerance
    pub fn is_unit(self, length: f64) -> bool {
        (length - 1.0).abs() <= self.unit
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

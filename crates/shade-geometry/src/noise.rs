//! Deterministic 2D value noise.

/// Smooth value noise on the integer lattice.
///
/// Lattice values come from an integer hash of the corner coordinates and
/// `seed`; between corners the values are blended with a smoothstep fade, so
/// the field is continuous everywhere. The result lies in `[0, 1]`.
pub fn value_noise(x: f64, y: f64, seed: u32) -> f64 {
    let xi = x.floor() as i32;
    let yi = y.floor() as i32;

    let sx = smoothstep(x - x.floor());
    let sy = smoothstep(y - y.floor());

    let n00 = lattice(xi, yi, seed);
    let n10 = lattice(xi.wrapping_add(1), yi, seed);
    let n01 = lattice(xi, yi.wrapping_add(1), seed);
    let n11 = lattice(xi.wrapping_add(1), yi.wrapping_add(1), seed);

    let n0 = n00 * (1.0 - sx) + n10 * sx;
    let n1 = n01 * (1.0 - sx) + n11 * sx;
    n0 * (1.0 - sy) + n1 * sy
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Hash a lattice point to `[0, 1]`.
fn lattice(x: i32, y: i32, seed: u32) -> f64 {
    let mut n = x
        .wrapping_mul(374_761_393)
        .wrapping_add(y.wrapping_mul(668_265_263))
        .wrapping_add(seed as i32);
    n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
    n ^= n >> 16;
    (n as u32) as f64 / u32::MAX as f64
}

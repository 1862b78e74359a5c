//! Seeded 2D simplex noise.
//!
//! Based on Stefan Gustavson's reference simplex noise, with the permutation
//! table built from a seeded Fisher-Yates shuffle so every seed gets its own
//! gradient arrangement.

use verdant_rng::Lcg;

/// Seeded 2D simplex noise generator.
///
/// Construction shuffles a 256-entry permutation table; evaluation is pure
/// over that immutable state, so a built instance is safe to share across
/// concurrent readers.
#[derive(Clone)]
pub struct Simplex2 {
    /// Permutation table, doubled to 512 entries for wrap-free indexing.
    perm: [u8; 512],
    /// `perm[i] % 12`, precomputed to skip a modulo in the evaluation path.
    perm_mod12: [u8; 512],
}

impl Simplex2 {
    /// Skew factor for 2D: `(sqrt(3) - 1) / 2`.
    const F2: f64 = 0.366_025_403_784_438_65;
    /// Unskew factor for 2D: `(3 - sqrt(3)) / 6`.
    const G2: f64 = 0.211_324_865_405_187_1;

    /// Gradient set: 12 edge-midpoint vectors of a cube. 2D evaluation uses
    /// the first two components.
    const GRAD3: [[f64; 3]; 12] = [
        [1.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0],
        [1.0, -1.0, 0.0],
        [-1.0, -1.0, 0.0],
        [1.0, 0.0, 1.0],
        [-1.0, 0.0, 1.0],
        [1.0, 0.0, -1.0],
        [-1.0, 0.0, -1.0],
        [0.0, 1.0, 1.0],
        [0.0, -1.0, 1.0],
        [0.0, 1.0, -1.0],
        [0.0, -1.0, -1.0],
    ];

    /// Build a noise generator for the given seed.
    pub fn new(seed: i64) -> Self {
        let mut rng = Lcg::new(seed);

        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
        for i in (1..256).rev() {
            let j = rng.next_index(i + 1);
            p.swap(i, j);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }

        Self { perm, perm_mod12 }
    }

    #[inline]
    fn dot2(g: &[f64; 3], x: f64, y: f64) -> f64 {
        g[0] * x + g[1] * y
    }

    /// Floor that stays correct for negative inputs without a libm call.
    #[inline]
    fn fast_floor(x: f64) -> i64 {
        if x >= 0.0 { x as i64 } else { x as i64 - 1 }
    }

    /// Evaluate the noise at `(x, y)`.
    ///
    /// Continuous in both arguments, deterministic for a given seed, and
    /// approximately bounded to `[-1, 1]`.
    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        // Skew the input space to find the containing simplex cell.
        let s = (x + y) * Self::F2;
        let i = Self::fast_floor(x + s);
        let j = Self::fast_floor(y + s);

        // Unskew the cell origin back to (x, y) space.
        let t = (i + j) as f64 * Self::G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // The 2D simplex is a triangle; pick the upper or lower half of the
        // skewed cell. x0 > y0 means the lower triangle, traversed
        // (0,0) -> (1,0) -> (1,1); otherwise (0,0) -> (0,1) -> (1,1).
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        // Offsets of the middle and far corners in unskewed coordinates.
        let x1 = x0 - i1 as f64 + Self::G2;
        let y1 = y0 - j1 as f64 + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        // Hash the three corners to gradient indices.
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let gi0 = self.perm_mod12[ii + self.perm[jj] as usize] as usize;
        let gi1 = self.perm_mod12[ii + i1 + self.perm[jj + j1] as usize] as usize;
        let gi2 = self.perm_mod12[ii + 1 + self.perm[jj + 1] as usize] as usize;

        // Radial falloff per corner: t = 0.5 - dx^2 - dy^2, contribution
        // t^4 * dot(gradient, d) when t is non-negative, zero otherwise.
        let mut n0 = 0.0;
        let mut t0 = 0.5 - x0 * x0 - y0 * y0;
        if t0 >= 0.0 {
            t0 *= t0;
            n0 = t0 * t0 * Self::dot2(&Self::GRAD3[gi0], x0, y0);
        }

        let mut n1 = 0.0;
        let mut t1 = 0.5 - x1 * x1 - y1 * y1;
        if t1 >= 0.0 {
            t1 *= t1;
            n1 = t1 * t1 * Self::dot2(&Self::GRAD3[gi1], x1, y1);
        }

        let mut n2 = 0.0;
        let mut t2 = 0.5 - x2 * x2 - y2 * y2;
        if t2 >= 0.0 {
            t2 *= t2;
            n2 = t2 * t2 * Self::dot2(&Self::GRAD3[gi2], x2, y2);
        }

        // Scale the corner sum into roughly [-1, 1].
        70.0 * (n0 + n1 + n2)
    }
}

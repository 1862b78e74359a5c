//! Poisson-disk sampling via Bridson's algorithm.
//!
//! Produces a point set over a rectangular domain where no two points are
//! closer than a configured minimum distance, using an accelerating grid
//! whose cell size guarantees at most one accepted point per cell.

use std::f64::consts::TAU;

use glam::DVec2;
use verdant_rng::{Lcg, det_cos, det_sin};

use crate::error::ScatterError;

/// Configuration for one Poisson-disk sampling run.
#[derive(Clone, Debug, PartialEq)]
pub struct PoissonConfig {
    /// Domain width; points satisfy `0 <= x < width`.
    pub width: f64,
    /// Domain height; points satisfy `0 <= y < height`.
    pub height: f64,
    /// Minimum Euclidean distance between any two accepted points.
    pub min_distance: f64,
    /// Candidates tried per active point before it is retired.
    pub max_attempts: u32,
    /// Seed for the sampling stream.
    pub seed: i64,
}

impl PoissonConfig {
    /// Default retry budget per active point.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

    /// Build a configuration with the default retry budget.
    pub fn new(width: f64, height: f64, min_distance: f64, seed: i64) -> Self {
        Self {
            width,
            height,
            min_distance,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            seed,
        }
    }

    fn validate(&self) -> Result<(), ScatterError> {
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(ScatterError::InvalidDomain {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.min_distance > 0.0 && self.min_distance.is_finite()) {
            return Err(ScatterError::InvalidSpacing(self.min_distance));
        }
        if self.max_attempts < 1 {
            return Err(ScatterError::InvalidRetryBudget(self.max_attempts));
        }
        Ok(())
    }
}

/// Uniform acceleration grid over the sampling domain.
///
/// Cell side is `min_distance / sqrt(2)`, so two points inside one cell
/// would necessarily violate the minimum distance; each cell therefore
/// holds at most one accepted point, stored as an index into the result
/// arena rather than a copy of the point.
struct CellGrid {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl CellGrid {
    fn new(width: f64, height: f64, min_distance: f64) -> Self {
        let cell_size = min_distance / std::f64::consts::SQRT_2;
        let cols = (width / cell_size).ceil() as usize;
        let rows = (height / cell_size).ceil() as usize;
        Self {
            cell_size,
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    fn cell_of(&self, p: DVec2) -> (usize, usize) {
        let cx = ((p.x / self.cell_size) as usize).min(self.cols - 1);
        let cy = ((p.y / self.cell_size) as usize).min(self.rows - 1);
        (cx, cy)
    }

    fn insert(&mut self, p: DVec2, index: usize) {
        let (cx, cy) = self.cell_of(p);
        self.cells[cy * self.cols + cx] = Some(index);
    }

    /// True if any accepted point within the surrounding 5x5 cell block is
    /// strictly closer than `min_distance` to the candidate. Points exactly
    /// `min_distance` away are allowed.
    fn too_close(&self, candidate: DVec2, points: &[DVec2], min_distance: f64) -> bool {
        let (cx, cy) = self.cell_of(candidate);
        let min_sq = min_distance * min_distance;

        let x_lo = cx.saturating_sub(2);
        let x_hi = (cx + 2).min(self.cols - 1);
        let y_lo = cy.saturating_sub(2);
        let y_hi = (cy + 2).min(self.rows - 1);

        for gy in y_lo..=y_hi {
            for gx in x_lo..=x_hi {
                if let Some(index) = self.cells[gy * self.cols + gx]
                    && candidate.distance_squared(points[index]) < min_sq
                {
                    return true;
                }
            }
        }
        false
    }
}

/// Generate a minimum-distance point set over `[0, width) x [0, height)`.
///
/// Every returned point keeps Euclidean distance `>= min_distance` to every
/// other, and the set is probabilistically maximal: once the active list
/// drains, no further point could be found within the retry budget. The
/// run is deterministic for a given configuration.
pub fn generate_poisson_disk(config: &PoissonConfig) -> Result<Vec<DVec2>, ScatterError> {
    config.validate()?;

    let d = config.min_distance;
    let mut rng = Lcg::new(config.seed);
    let mut grid = CellGrid::new(config.width, config.height, d);
    let mut points: Vec<DVec2> = Vec::new();
    // Indices into `points` still eligible to spawn candidates.
    let mut active: Vec<usize> = Vec::new();

    let first = DVec2::new(
        rng.next_f64() * config.width,
        rng.next_f64() * config.height,
    );
    grid.insert(first, 0);
    points.push(first);
    active.push(0);

    while !active.is_empty() {
        let slot = rng.next_index(active.len());
        let parent = points[active[slot]];
        let mut accepted = false;

        for _ in 0..config.max_attempts {
            // Candidate in the annulus [d, 2d) around the parent.
            let angle = rng.next_f64() * TAU;
            let radius = d + rng.next_f64() * d;
            let candidate = DVec2::new(
                parent.x + det_cos(angle) * radius,
                parent.y + det_sin(angle) * radius,
            );

            if candidate.x < 0.0
                || candidate.x >= config.width
                || candidate.y < 0.0
                || candidate.y >= config.height
            {
                continue;
            }
            if grid.too_close(candidate, &points, d) {
                continue;
            }

            let index = points.len();
            grid.insert(candidate, index);
            points.push(candidate);
            active.push(index);
            accepted = true;
            break;
        }

        if !accepted {
            // Retired points stay in the result; they just stop spawning.
            active.swap_remove(slot);
        }
    }

    tracing::debug!(
        count = points.len(),
        width = config.width,
        height = config.height,
        min_distance = d,
        "poisson disk run complete"
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_distance_holds_brute_force() {
        let config = PoissonConfig::new(30.0, 30.0, 2.0, 123);
        let points = generate_poisson_disk(&config).unwrap();

        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                let dist = a.distance(*b);
                assert!(
                    dist >= config.min_distance - 1e-9,
                    "Points {i} and {j} too close: distance={dist}"
                );
            }
        }
    }

    #[test]
    fn test_all_points_within_bounds() {
        let config = PoissonConfig::new(40.0, 25.0, 1.5, 7);
        let points = generate_poisson_disk(&config).unwrap();

        for (i, p) in points.iter().enumerate() {
            assert!(
                p.x >= 0.0 && p.x < 40.0 && p.y >= 0.0 && p.y < 25.0,
                "Point {i} at ({}, {}) escaped the half-open domain",
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn test_deterministic_for_same_config() {
        let config = PoissonConfig::new(30.0, 30.0, 2.0, 42);
        let a = generate_poisson_disk(&config).unwrap();
        let b = generate_poisson_disk(&config).unwrap();

        assert_eq!(a.len(), b.len());
        for (i, (pa, pb)) in a.iter().zip(b.iter()).enumerate() {
            assert_eq!(pa, pb, "Point {i} differs between identical runs");
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_poisson_disk(&PoissonConfig::new(30.0, 30.0, 2.0, 1)).unwrap();
        let b = generate_poisson_disk(&PoissonConfig::new(30.0, 30.0, 2.0, 2)).unwrap();
        assert!(
            a.len() != b.len() || a.iter().zip(b.iter()).any(|(x, y)| x != y),
            "Different seeds should produce different point sets"
        );
    }

    #[test]
    fn test_domain_fills_densely() {
        // 30x30 domain with spacing 2: area far exceeds the spacing square,
        // so far more than the seed point must be accepted.
        let points = generate_poisson_disk(&PoissonConfig::new(30.0, 30.0, 2.0, 123)).unwrap();
        assert!(
            points.len() > 50,
            "Expected a dense fill of the 30x30 domain, got {} points",
            points.len()
        );
    }

    #[test]
    fn test_small_domain_yields_at_least_seed_point() {
        // Domain smaller than the spacing: only the seed point fits.
        let points = generate_poisson_disk(&PoissonConfig::new(1.0, 1.0, 5.0, 9)).unwrap();
        assert_eq!(points.len(), 1, "Only the seed point should fit");
    }

    #[test]
    fn test_negative_width_rejected() {
        let config = PoissonConfig::new(-1.0, 10.0, 1.0, 0);
        assert!(matches!(
            generate_poisson_disk(&config),
            Err(ScatterError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let config = PoissonConfig::new(10.0, 10.0, 0.0, 0);
        assert!(matches!(
            generate_poisson_disk(&config),
            Err(ScatterError::InvalidSpacing(_))
        ));
    }

    #[test]
    fn test_nan_dimensions_rejected() {
        let config = PoissonConfig::new(f64::NAN, 10.0, 1.0, 0);
        assert!(matches!(
            generate_poisson_disk(&config),
            Err(ScatterError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_zero_retry_budget_rejected() {
        let mut config = PoissonConfig::new(10.0, 10.0, 1.0, 0);
        config.max_attempts = 0;
        assert!(matches!(
            generate_poisson_disk(&config),
            Err(ScatterError::InvalidRetryBudget(0))
        ));
    }
}

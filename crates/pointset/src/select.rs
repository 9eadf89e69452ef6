//! Weighted choice of the point of interest.
//!
//! A single draw `r ∈ [0, 1)` is checked against two cutoffs in priority order:
//! 1. `r <= boundary_cutoff` and some boundary point exists → boundary.
//! 2. `boundary_cutoff < r <= internal_cutoff` and some internal point exists → internal.
//! 3. otherwise → a uniformly chosen empty cell, labeled external.
//!
//! An empty candidate set in step 1 or 2 falls through to step 3; it does not
//! retry the other filled category.

use crate::classification::Classification;
use crate::grid::{Grid3, Point};
use crate::rng::RandomSource;

/// Selection cutoffs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectCfg {
    pub boundary_cutoff: f64,
    pub internal_cutoff: f64,
}

impl Default for SelectCfg {
    fn default() -> Self {
        Self {
            boundary_cutoff: 0.6,
            internal_cutoff: 0.8,
        }
    }
}

/// Filled points with at least one in-bounds empty face-neighbor.
pub fn boundary_points(grid: &Grid3) -> Vec<Point> {
    grid.filled_points()
        .into_iter()
        .filter(|&p| grid.is_boundary(p))
        .collect()
}

/// Filled points whose 6 face-neighbors are all in bounds and filled.
pub fn internal_points(grid: &Grid3) -> Vec<Point> {
    grid.filled_points()
        .into_iter()
        .filter(|&p| grid.is_internal(p))
        .collect()
}

/// Draw `r` and pick the point of interest. `None` only if the external
/// fallback is reached on a grid without empty cells.
pub fn select_point<R: RandomSource + ?Sized>(
    grid: &Grid3,
    cfg: &SelectCfg,
    rng: &mut R,
) -> Option<(Point, Classification)> {
    let r = rng.uniform_float();
    select_point_with_draw(grid, r, cfg, rng)
}

/// Selection with an explicit draw `r`; `rng` is used only to pick among candidates.
pub fn select_point_with_draw<R: RandomSource + ?Sized>(
    grid: &Grid3,
    r: f64,
    cfg: &SelectCfg,
    rng: &mut R,
) -> Option<(Point, Classification)> {
    if r <= cfg.boundary_cutoff {
        let candidates = boundary_points(grid);
        if let Some(&p) = rng.choice(&candidates) {
            return Some((p, Classification::Boundary));
        }
    }
    if cfg.boundary_cutoff < r && r <= cfg.internal_cutoff && grid.count_filled() > 0 {
        let candidates = internal_points(grid);
        if let Some(&p) = rng.choice(&candidates) {
            return Some((p, Classification::Internal));
        }
    }
    let empty = grid.empty_points();
    rng.choice(&empty).map(|&p| (p, Classification::External))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::classify;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seed_only() -> Grid3 {
        let mut g = Grid3::new(4);
        g.fill(Point::new(1, 1, 1));
        g
    }

    /// 3³ block centered at (2,2,2) in a 5³ grid: one internal cell.
    fn block() -> Grid3 {
        let mut g = Grid3::new(5);
        for x in 1..4 {
            for y in 1..4 {
                for z in 1..4 {
                    g.fill(Point::new(x, y, z));
                }
            }
        }
        g
    }

    #[test]
    fn seed_only_low_draw_returns_seed_as_boundary() {
        let mut rng = StdRng::seed_from_u64(0);
        let got = select_point_with_draw(&seed_only(), 0.5, &SelectCfg::default(), &mut rng);
        assert_eq!(got, Some((Point::new(1, 1, 1), Classification::Boundary)));
    }

    #[test]
    fn seed_only_high_draw_returns_external() {
        let mut rng = StdRng::seed_from_u64(0);
        let (p, c) =
            select_point_with_draw(&seed_only(), 0.9, &SelectCfg::default(), &mut rng).unwrap();
        assert_eq!(c, Classification::External);
        assert_ne!(p, Point::new(1, 1, 1));
    }

    #[test]
    fn middle_draw_without_internal_points_falls_through_to_external() {
        let mut rng = StdRng::seed_from_u64(0);
        let (_, c) =
            select_point_with_draw(&seed_only(), 0.7, &SelectCfg::default(), &mut rng).unwrap();
        assert_eq!(c, Classification::External);
    }

    #[test]
    fn middle_draw_picks_the_internal_cell() {
        let mut rng = StdRng::seed_from_u64(0);
        let got = select_point_with_draw(&block(), 0.7, &SelectCfg::default(), &mut rng);
        assert_eq!(got, Some((Point::new(2, 2, 2), Classification::Internal)));
    }

    #[test]
    fn boundary_cutoff_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(0);
        let (_, c) = select_point_with_draw(&block(), 0.6, &SelectCfg::default(), &mut rng).unwrap();
        assert_eq!(c, Classification::Boundary);
        let (_, c) = select_point_with_draw(&block(), 0.8, &SelectCfg::default(), &mut rng).unwrap();
        assert_eq!(c, Classification::Internal);
    }

    #[test]
    fn low_draw_on_wall_hugging_solid_falls_through() {
        // Full grid: no empty neighbors anywhere, so no boundary and no external.
        let mut g = Grid3::new(4);
        let pts: Vec<Point> = g.points().collect();
        for p in pts {
            g.fill(p);
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select_point_with_draw(&g, 0.1, &SelectCfg::default(), &mut rng), None);
    }

    #[test]
    fn candidate_sets_match_classify() {
        let g = block();
        let boundary = boundary_points(&g);
        let internal = internal_points(&g);
        assert_eq!(boundary.len(), 26);
        assert_eq!(internal, vec![Point::new(2, 2, 2)]);
        for p in boundary {
            assert_eq!(classify(&g, p), Some(Classification::Boundary));
        }
    }

    #[test]
    fn selected_labels_agree_with_grid() {
        let g = block();
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let (p, c) = select_point(&g, &SelectCfg::default(), &mut rng).unwrap();
            assert_eq!(classify(&g, p), Some(c));
        }
    }
}

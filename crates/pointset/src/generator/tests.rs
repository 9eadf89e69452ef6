use super::*;
use crate::grid::{classify, Grid3};
use crate::render::parse_diagram;
use proptest::prelude::*;

/// Rebuild the grid from the metadata snapshot.
fn grid_of(inst: &PuzzleInstance) -> Grid3 {
    let meta = inst.metadata();
    let n = meta.grid_size;
    let mut g = Grid3::new(n);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                if meta.grid[x][y][z] == "X" {
                    g.fill(Point::new(x, y, z));
                }
            }
        }
    }
    g
}

/// Pull `[x, y, z]` back out of the question's last line.
fn point_of(inst: &PuzzleInstance) -> Point {
    let q = inst.question();
    let start = q.rfind("Is the point [").unwrap() + "Is the point [".len();
    let end = start + q[start..].find(']').unwrap();
    let xs: Vec<usize> = q[start..end]
        .split(", ")
        .map(|s| s.parse().unwrap())
        .collect();
    Point::new(xs[0], xs[1], xs[2])
}

#[test]
fn rejects_out_of_range_difficulty_before_any_work() {
    let mut gen = ClusterGenerator::from_seed(1);
    for d in [0, 11, 100] {
        let err = gen.generate(3, d).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "difficulty must be between 1 and 10");
    }
    assert!(gen.generate_one(0).is_err());
    assert!(ClusterGenerator::generate_replay(
        &GeneratorCfg::default(),
        ReplayToken { seed: 1, index: 0 },
        11
    )
    .is_err());
}

#[test]
fn zero_questions_is_empty() {
    let mut gen = ClusterGenerator::from_seed(1);
    assert!(gen.generate(0, 5).unwrap().is_empty());
}

#[test]
fn question_text_layout() {
    let mut g = Grid3::new(4);
    g.fill(Point::new(1, 1, 1));
    let diagram = crate::render::render_grid(&g);
    let q = question_text(&diagram, Point::new(1, 1, 1));
    assert!(q.starts_with("Classify the given set of points in 3D space:\n\nFlow z=0:\nEmpty\n"));
    assert!(q.ends_with("Flow z=3:\nEmpty\n\n\nIs the point [1, 1, 1] internal, boundary, or external?"));
}

#[test]
fn instances_are_self_consistent() {
    let mut gen = ClusterGenerator::from_seed(2025);
    for d in 1..=10 {
        for inst in gen.generate(5, d).unwrap() {
            let grid = grid_of(&inst);
            assert_eq!(inst.difficulty(), d);
            assert_eq!(inst.metadata().grid_size, 3 + d as usize);
            assert!(grid.count_filled() >= 1);

            let label: Classification = inst.answer().parse().unwrap();
            assert_eq!(classify(&grid, point_of(&inst)), Some(label));

            let diagram_start = "Classify the given set of points in 3D space:\n\n".len();
            let diagram_end = inst.question().rfind("\n\nIs the point").unwrap();
            let parsed = parse_diagram(&inst.question()[diagram_start..diagram_end]).unwrap();
            assert_eq!(parsed, grid);
        }
    }
}

#[test]
fn same_seed_same_batch() {
    let a = ClusterGenerator::from_seed(7).generate(10, 4).unwrap();
    let b = ClusterGenerator::from_seed(7).generate(10, 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn replay_matches_seeded_batch_entry() {
    let cfg = GeneratorCfg::default();
    let batch = ClusterGenerator::generate_seeded_batch(&cfg, 99, 6, 3).unwrap();
    assert_eq!(batch.len(), 6);
    let replayed =
        ClusterGenerator::generate_replay(&cfg, ReplayToken { seed: 99, index: 4 }, 3).unwrap();
    assert_eq!(replayed, batch[4]);
}

#[test]
fn label_mix_covers_all_three_classes() {
    let mut gen = ClusterGenerator::from_seed(31337);
    let labels: std::collections::HashSet<String> = gen
        .generate(500, 6)
        .unwrap()
        .into_iter()
        .map(|i| i.answer().to_string())
        .collect();
    assert!(labels.contains("boundary"));
    assert!(labels.contains("external"));
    assert!(labels.contains("internal"));
}

#[test]
fn game_surface() {
    let mut gen = ClusterGenerator::from_seed(5);
    assert_eq!(Game::name(&gen), "PointSet");
    assert_eq!(Game::extract_answer(&gen, "the answer is internal"), "");
    let inst = Game::generate(&mut gen, 1, 2).unwrap().remove(0);
    let truth = inst.answer().to_string();
    assert!(Game::verify(&gen, &inst, &format!("Answer: {truth}")));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_valid_difficulty_yields_n_instances(seed in any::<u64>(), d in 1u32..=10, n in 0usize..4) {
        let out = ClusterGenerator::from_seed(seed).generate(n, d).unwrap();
        prop_assert_eq!(out.len(), n);
        for inst in &out {
            prop_assert_eq!(inst.metadata().grid_size, 3 + d as usize);
            prop_assert!(grid_of(inst).count_filled() >= 1);
        }
    }

    #[test]
    fn prop_invalid_difficulty_fails(seed in any::<u64>(), d in prop_oneof![Just(0u32), 11u32..1000]) {
        let err = ClusterGenerator::from_seed(seed).generate(1, d).unwrap_err();
        prop_assert!(
            matches!(err, GeneratorError::InvalidArgument { .. }),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn prop_selected_point_matches_label(seed in any::<u64>(), d in 1u32..=10) {
        let inst = ClusterGenerator::from_seed(seed).generate_one(d).unwrap();
        let grid = grid_of(&inst);
        let p = point_of(&inst);
        match inst.answer() {
            "internal" => {
                prop_assert!(grid.is_filled(p));
                prop_assert_eq!(grid.face_neighbors(p).count(), 6);
                prop_assert!(grid.face_neighbors(p).all(|q| grid.is_filled(q)));
            }
            "boundary" => {
                prop_assert!(grid.is_filled(p));
                prop_assert!(grid.face_neighbors(p).any(|q| !grid.is_filled(q)));
            }
            "external" => prop_assert!(!grid.is_filled(p)),
            other => prop_assert!(false, "unexpected label {}", other),
        }
    }
}

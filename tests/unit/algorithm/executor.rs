//! Tests for sequential tower placement and renderer notifications

#[cfg(test)]
mod tests {
    use towergrid::AlgorithmError;
    use towergrid::algorithm::executor::CoverageSimulation;
    use towergrid::algorithm::generator::{ScriptedTowers, TowerColor};
    use towergrid::algorithm::rectangle::ScanStrategy;
    use towergrid::io::visualization::CoverageRenderer;
    use towergrid::spatial::{Claim, Footprint};

    const fn footprint(x: usize, y: usize, width: usize, height: usize) -> Footprint {
        Footprint {
            x,
            y,
            width,
            height,
        }
    }

    fn scripted(towers: &[Footprint]) -> ScriptedTowers {
        ScriptedTowers::new(
            towers
                .iter()
                .enumerate()
                .map(|(i, &f)| (f, TowerColor::rgb(i as u8 * 40, 100, 200))),
        )
    }

    #[derive(Default)]
    struct Recorder {
        footprints: usize,
        removals: usize,
        claims: Vec<(usize, Claim)>,
    }

    impl CoverageRenderer for Recorder {
        fn draw_footprint(&mut self, _tower: usize, _footprint: &Footprint, _color: TowerColor) {
            self.footprints += 1;
        }

        fn remove_footprint(&mut self, _tower: usize) {
            self.removals += 1;
        }

        fn draw_claim(&mut self, tower: usize, claim: &Claim, _color: TowerColor) {
            self.claims.push((tower, *claim));
        }
    }

    fn three_tower_simulation() -> CoverageSimulation {
        let towers = [
            footprint(0, 0, 3, 4),
            footprint(1, 1, 4, 2),
            footprint(0, 0, 2, 2),
            footprint(5, 0, 2, 1),
        ];
        CoverageSimulation::new(6, 4, Box::new(scripted(&towers)), ScanStrategy::Exact)
            .expect("valid dimensions")
    }

    // Tests each placement claims only cells not covered before
    // Verified by skipping the overlap subtraction
    #[test]
    fn test_scripted_placements() {
        let mut simulation = three_tower_simulation();

        let first = simulation.place_next().expect("fits");
        assert_eq!(
            first.claim,
            Some(Claim {
                x: 0,
                y: 0,
                width: 3,
                height: 4,
                row: 3,
            })
        );
        assert_eq!(first.newly_covered, 12);

        let second = simulation.place_next().expect("fits");
        assert_eq!(
            second.claim,
            Some(Claim {
                x: 3,
                y: 1,
                width: 2,
                height: 2,
                row: 2,
            })
        );
        assert_eq!(second.newly_covered, 4);

        let third = simulation.place_next().expect("fits");
        assert_eq!(third.claim, None);
        assert_eq!(third.claimed_area(), 0);
        assert_eq!(third.newly_covered, 0);

        assert_eq!(simulation.grid.covered_cells(), 16);
        assert_eq!(simulation.towers_placed(), 3);
    }

    // Tests a bounds violation reports the tower and leaves the grid untouched
    // Verified by truncating the footprint to the grid
    #[test]
    fn test_out_of_bounds_tower_fails() {
        let mut simulation = three_tower_simulation();
        for _ in 0..3 {
            simulation.place_next().expect("fits");
        }
        let before = simulation.grid.clone();

        let result = simulation.place_next();

        assert!(matches!(
            result,
            Err(AlgorithmError::FootprintOutOfBounds { tower: Some(3), .. })
        ));
        assert_eq!(simulation.grid, before);
        assert_eq!(simulation.towers_placed(), 3);
    }

    // Tests the summary counts empty placements and coverage
    // Verified by counting claims instead of empty placements
    #[test]
    fn test_summary() {
        let mut simulation = three_tower_simulation();
        let mut seen = 0;

        let summary = simulation.run(3, |_| seen += 1).expect("fits");

        assert_eq!(seen, 3);
        assert_eq!(summary.towers, 3);
        assert_eq!(summary.empty_placements, 1);
        assert_eq!(summary.covered_cells, 16);
        assert!((summary.coverage_ratio - 16.0 / 24.0).abs() < 1e-12);
    }

    // Tests the run stops at the first failing tower
    // Verified by continuing past placement errors
    #[test]
    fn test_run_propagates_errors() {
        let mut simulation = three_tower_simulation();
        assert!(simulation.run(5, |_| {}).is_err());
        assert_eq!(simulation.towers_placed(), 3);
    }

    // Tests visualization capture receives every drawing instruction
    // Verified by skipping the render call when visualization is enabled
    #[test]
    fn test_visualization_events() {
        let mut simulation = three_tower_simulation();
        simulation.enable_visualization(2, 3);

        simulation.run(3, |_| {}).expect("fits");

        let capture = simulation.visualization.as_ref().expect("enabled");
        assert_eq!(capture.event_count(), 8);
    }

    // Tests replay forwards footprints, removals and claims to any renderer
    // Verified by drawing claims for empty placements
    #[test]
    fn test_replay_into_renderer() {
        let mut simulation = three_tower_simulation();
        simulation.run(3, |_| {}).expect("fits");

        let mut recorder = Recorder::default();
        simulation.replay(&mut recorder);

        assert_eq!(recorder.footprints, 3);
        assert_eq!(recorder.removals, 3);
        assert_eq!(
            recorder.claims.iter().map(|(tower, _)| *tower).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    // Tests fixed footprints can be placed without a source
    // Verified by ignoring the footprint argument
    #[test]
    fn test_place_fixed_footprint() {
        let mut simulation = CoverageSimulation::new(
            5,
            5,
            Box::new(ScriptedTowers::new(Vec::new())),
            ScanStrategy::RunScan,
        )
        .expect("valid dimensions");

        let outcome = simulation
            .place_footprint(footprint(1, 2, 3, 2), TowerColor::rgb(1, 2, 3))
            .expect("fits");

        assert_eq!(outcome.tower, 0);
        assert_eq!(outcome.claimed_area(), 6);
        assert!(simulation.grid.is_covered(2, 1));
        assert!(!simulation.grid.is_covered(1, 1));
    }

    // Tests random runs claim disjoint rectangles inside their footprints
    // Verified by committing the whole footprint instead of the claim
    #[test]
    fn test_random_run_claims_are_disjoint() {
        let mut simulation =
            CoverageSimulation::seeded(20, 12, 42, ScanStrategy::Exact).expect("valid dimensions");

        let summary = simulation.run(40, |_| {}).expect("random towers fit");

        let claims: Vec<(Footprint, Claim)> = simulation
            .history
            .iter()
            .filter_map(|outcome| outcome.claim.map(|claim| (outcome.footprint, claim)))
            .collect();

        let mut total = 0;
        for (i, (requested, claim)) in claims.iter().enumerate() {
            assert!(claim.x >= requested.x && claim.x + claim.width <= requested.x + requested.width);
            assert!(
                claim.y >= requested.y && claim.y + claim.height <= requested.y + requested.height
            );
            for (_, other) in claims.iter().skip(i + 1) {
                assert!(claim.cells().all(|(row, col)| !other.contains(row, col)));
            }
            total += claim.area();
        }

        assert_eq!(total, summary.covered_cells);
        assert_eq!(summary.towers, 40);
    }
}

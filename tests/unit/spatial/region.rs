//! Tests for footprint rasterization and claim geometry

#[cfg(test)]
mod tests {
    use ndarray::array;
    use towergrid::AlgorithmError;
    use towergrid::spatial::{Claim, CoverageGrid, Footprint};

    // Tests zero-sized footprints are rejected
    // Verified by removing the width check
    #[test]
    fn test_footprint_requires_extent() {
        assert!(Footprint::new(0, 0, 0, 1).is_err());
        assert!(Footprint::new(0, 0, 1, 0).is_err());
        assert_eq!(
            Footprint::new(1, 2, 3, 4).map(|footprint| footprint.area()).ok(),
            Some(12)
        );
    }

    // Tests rasterization marks only footprint cells
    // Verified by swapping the row and column slices
    #[test]
    fn test_to_array_marks_footprint() {
        let grid = CoverageGrid::new(4, 3).expect("valid dimensions");
        let footprint = Footprint {
            x: 1,
            y: 0,
            width: 2,
            height: 2,
        };

        let raster = footprint.to_array(&grid).expect("fits");

        assert_eq!(raster, array![[0u8, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]);
    }

    // Tests a footprint flush with the bottom-right corner fills exactly its cells
    // Verified by using exclusive bounds on the last row and column
    #[test]
    fn test_to_array_corner_footprint() {
        let grid = CoverageGrid::new(3, 3).expect("valid dimensions");
        let footprint = Footprint {
            x: 1,
            y: 1,
            width: 2,
            height: 2,
        };

        let raster = footprint.to_array(&grid).expect("fits");

        assert_eq!(raster, array![[0u8, 0, 0], [0, 1, 1], [0, 1, 1]]);
        assert_eq!(raster.iter().filter(|&&cell| cell == 1).count(), footprint.area());
    }

    // Tests footprints reaching past the grid fail instead of truncating
    // Verified by replacing the bounds check with a clamp
    #[test]
    fn test_out_of_bounds_footprint_fails() {
        let grid = CoverageGrid::new(4, 3).expect("valid dimensions");
        let wide = Footprint {
            x: 3,
            y: 0,
            width: 2,
            height: 1,
        };
        let tall = Footprint {
            x: 0,
            y: 2,
            width: 1,
            height: 2,
        };

        for footprint in [wide, tall] {
            assert!(matches!(
                footprint.to_array(&grid),
                Err(AlgorithmError::FootprintOutOfBounds { tower: None, .. })
            ));
        }
    }

    // Tests overflowing coordinates are treated as out of bounds
    // Verified by using unchecked addition
    #[test]
    fn test_overflowing_footprint_fails() {
        let grid = CoverageGrid::new(4, 3).expect("valid dimensions");
        let footprint = Footprint {
            x: usize::MAX,
            y: 0,
            width: 2,
            height: 1,
        };
        assert!(footprint.check_bounds(&grid).is_err());
    }

    // Tests the full-grid footprint fits exactly
    // Verified by adding one to the full footprint width
    #[test]
    fn test_full_footprint_fits() {
        let grid = CoverageGrid::new(5, 2).expect("valid dimensions");
        let footprint = Footprint::full(&grid);
        assert!(footprint.check_bounds(&grid).is_ok());
        assert_eq!(footprint.area(), 10);
    }

    // Tests claims anchor their top row from the discovery row
    // Verified by using the discovery row as the top row
    #[test]
    fn test_claim_from_bottom() {
        let claim = Claim::from_bottom(2, 4, 3, 2).expect("fits above row 4");
        assert_eq!(claim.y, 3);
        assert_eq!(claim.row, 4);
        assert_eq!(claim.area(), 6);

        assert!(Claim::from_bottom(0, 1, 1, 3).is_none());
        assert!(Claim::from_bottom(0, 1, 1, 0).is_none());
    }

    // Tests claim containment and cell iteration agree
    // Verified by making the containment check inclusive of the right edge
    #[test]
    fn test_claim_cells_and_contains() {
        let claim = Claim {
            x: 1,
            y: 2,
            width: 2,
            height: 2,
            row: 3,
        };

        let cells: Vec<_> = claim.cells().collect();
        assert_eq!(cells, vec![(2, 1), (2, 2), (3, 1), (3, 2)]);
        assert!(cells.iter().all(|&(row, col)| claim.contains(row, col)));
        assert!(!claim.contains(2, 3));
        assert!(!claim.contains(1, 1));
    }
}

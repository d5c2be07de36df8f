//! Connected component regression test
//!
//! Exercises `label` on hand-built fixtures with known blob lists and on a
//! decoded image fixture.
//!
//! Run with:
//! ```
//! cargo test -p cellscope-region --test conncomp_reg
//! ```

use cellscope_core::{BinaryMask, Blob, LabelingResult, PixelCoordinate};
use cellscope_io::ThresholdOptions;
use cellscope_region::{ConnectivityType, RegionError, label, label_slice};
use cellscope_test::{RegParams, load_test_mask, mask_from_rows};

fn pc(row: u32, col: u32) -> PixelCoordinate {
    PixelCoordinate::new(row, col)
}

fn blobs(lists: &[&[(u32, u32)]]) -> LabelingResult {
    lists
        .iter()
        .map(|coords| Blob::new(coords.iter().map(|&(r, c)| pc(r, c)).collect()).unwrap())
        .collect()
}

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    // -----------------------------------------------------------
    // 3x3 mask, foreground at (0,0), (0,1), (2,2)
    // -----------------------------------------------------------
    let mask = mask_from_rows(&["##.", "...", "..#"]).unwrap();
    let result = label(&mask, ConnectivityType::EightWay).unwrap();
    rp.compare_blobs(&blobs(&[&[(0, 0), (0, 1)], &[(2, 2)]]), &result);

    // -----------------------------------------------------------
    // Diagonal touch: 2 blobs 4-way, 1 blob 8-way
    // -----------------------------------------------------------
    let diag = mask_from_rows(&["#.", ".#"]).unwrap();
    let n4 = label(&diag, ConnectivityType::FourWay).unwrap().len();
    let n8 = label(&diag, ConnectivityType::EightWay).unwrap().len();
    eprintln!("Diagonal pair: n4 = {}, n8 = {}", n4, n8);
    rp.compare_values(2.0, n4 as f64, 0.0);
    rp.compare_values(1.0, n8 as f64, 0.0);

    // -----------------------------------------------------------
    // Boundary cases
    // -----------------------------------------------------------
    for (w, h) in [(0, 0), (0, 5), (5, 0)] {
        let empty = BinaryMask::new(w, h);
        let r = label(&empty, ConnectivityType::EightWay).unwrap();
        rp.compare_values(0.0, r.len() as f64, 0.0);
    }
    let background = BinaryMask::new(9, 7);
    rp.compare_values(
        0.0,
        label(&background, ConnectivityType::FourWay).unwrap().len() as f64,
        0.0,
    );
    let single = mask_from_rows(&["....", "..#.", "...."]).unwrap();
    rp.compare_blobs(
        &blobs(&[&[(1, 2)]]),
        &label(&single, ConnectivityType::EightWay).unwrap(),
    );

    // -----------------------------------------------------------
    // Ring: one blob; BFS order pinned
    // -----------------------------------------------------------
    let ring = mask_from_rows(&["###", "#.#", "###"]).unwrap();
    let r = label(&ring, ConnectivityType::FourWay).unwrap();
    rp.compare_blobs(
        &blobs(&[&[
            (0, 0),
            (0, 1),
            (1, 0),
            (0, 2),
            (2, 0),
            (1, 2),
            (2, 1),
            (2, 2),
        ]]),
        &r,
    );

    // -----------------------------------------------------------
    // Blob order follows seed discovery, not blob size
    // -----------------------------------------------------------
    let order = mask_from_rows(&["...#", "#..#", "#..#", "#..."]).unwrap();
    let r = label(&order, ConnectivityType::EightWay).unwrap();
    rp.compare_blobs(
        &blobs(&[&[(0, 3), (1, 3), (2, 3)], &[(1, 0), (2, 0), (3, 0)]]),
        &r,
    );

    // -----------------------------------------------------------
    // Decoded image fixture
    // -----------------------------------------------------------
    let cells = load_test_mask("cells.pgm", &ThresholdOptions::default()).unwrap();
    rp.compare_values(8.0, cells.width() as f64, 0.0);
    rp.compare_values(6.0, cells.height() as f64, 0.0);
    let r8 = label(&cells, ConnectivityType::EightWay).unwrap();
    rp.compare_blobs(
        &blobs(&[
            &[(0, 0), (0, 1), (1, 0)],
            &[(1, 4), (2, 3)],
            &[(4, 6), (4, 7), (5, 6)],
        ]),
        &r8,
    );
    let r4 = label(&cells, ConnectivityType::FourWay).unwrap();
    rp.compare_blobs(
        &blobs(&[
            &[(0, 0), (0, 1), (1, 0)],
            &[(1, 4)],
            &[(2, 3)],
            &[(4, 6), (4, 7), (5, 6)],
        ]),
        &r4,
    );

    assert!(rp.cleanup(), "conncomp regression test failed");
}

#[test]
fn conncomp_dimension_mismatch_reg() {
    let err = label_slice(4, 4, &[false; 15], ConnectivityType::EightWay).unwrap_err();
    assert_eq!(
        err,
        RegionError::DimensionMismatch {
            width: 4,
            height: 4,
            expected: 16,
            actual: 15,
        }
    );

    // Zero-sized declarations accept only empty storage.
    assert!(label_slice(0, 3, &[], ConnectivityType::FourWay).is_ok());
    assert!(label_slice(0, 3, &[true], ConnectivityType::FourWay).is_err());
}

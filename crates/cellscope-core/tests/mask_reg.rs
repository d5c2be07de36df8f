//! Mask and blob value-type regression test

use cellscope_core::{BinaryMask, Blob, Error, LabelingResult, PixelCoordinate};
use cellscope_test::{RegParams, mask_from_rows, random_mask};

#[test]
fn mask_reg() {
    let mut rp = RegParams::new("mask");

    let mask = mask_from_rows(&["#..#", ".##.", "#..#"]).unwrap();
    rp.compare_values(4.0, mask.width() as f64, 0.0);
    rp.compare_values(3.0, mask.height() as f64, 0.0);
    rp.compare_values(6.0, mask.count_foreground() as f64, 0.0);

    // from_vec / as_slice / from_rows agree
    let rebuilt = BinaryMask::from_vec(4, 3, mask.as_slice().to_vec()).unwrap();
    rp.compare_masks(&mask, &rebuilt);
    let rows: Vec<Vec<bool>> = (0..3).map(|r| mask.row(r).unwrap().to_vec()).collect();
    rp.compare_masks(&mask, &BinaryMask::from_rows(&rows).unwrap());

    // Double inversion is the identity
    let noisy = random_mask(17, 9, 50, 3);
    rp.compare_masks(&noisy, &noisy.inverted().inverted());
    rp.compare_values(
        (17 * 9) as f64,
        (noisy.count_foreground() + noisy.inverted().count_foreground()) as f64,
        0.0,
    );

    // Foreground iterator is raster ordered and complete
    let fg: Vec<PixelCoordinate> = noisy.foreground().collect();
    let mut sorted = fg.clone();
    sorted.sort();
    rp.compare_values(1.0, (fg == sorted) as u8 as f64, 0.0);
    rp.compare_values(noisy.count_foreground() as f64, fg.len() as f64, 0.0);

    assert!(rp.cleanup(), "mask regression test failed");
}

#[test]
fn mask_storage_mismatch_reg() {
    assert!(matches!(
        BinaryMask::from_vec(2, 5, vec![true; 9]),
        Err(Error::DimensionMismatch {
            expected: 10,
            actual: 9,
            ..
        })
    ));
    assert!(BinaryMask::from_vec(0, 0, Vec::new()).is_ok());
}

#[test]
fn blob_value_reg() {
    // A blob outlives the mask it was built from.
    let blob = {
        let mask = mask_from_rows(&[".#"]).unwrap();
        let seed = mask.foreground().next().unwrap();
        Blob::from_seed(seed)
    };
    assert_eq!(blob.seed(), PixelCoordinate::new(0, 1));

    let result = LabelingResult::from_blobs(vec![blob.clone()]);
    assert_eq!(result.into_blobs(), vec![blob]);
}

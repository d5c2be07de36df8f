//! cellscope-test - Regression test framework for CellScope
//!
//! Shared helpers for the `tests/*_reg.rs` suites of the workspace crates:
//!
//! - [`RegParams`] - accumulates comparison failures for a named test
//! - [`mask_from_rows`] - ASCII mask fixtures (`#` foreground, `.` background)
//! - [`random_mask`] - reproducible pseudo-random masks
//! - [`load_test_mask`] - image fixtures from `tests/data/masks`
//! - [`init_logging`] - `env_logger` set up for tests, honoring `RUST_LOG`
//!
//! # Usage
//!
//! ```ignore
//! use cellscope_test::{RegParams, mask_from_rows};
//!
//! let mut rp = RegParams::new("conncomp");
//! let mask = mask_from_rows(&["##.", "...", "..#"]).unwrap();
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every comparison
//! - `RUST_LOG`: Log filter for the code under test

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode, format_blobs};

use cellscope_core::BinaryMask;
use cellscope_io::ThresholdOptions;

/// Initialize `env_logger` for tests. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse an ASCII mask: `#` is foreground, `.` is background.
///
/// # Errors
///
/// Returns [`TestError::BadFixture`] on any other character or on rows of
/// unequal length.
pub fn mask_from_rows(rows: &[&str]) -> TestResult<BinaryMask> {
    let mut cells: Vec<Vec<bool>> = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let parsed = line
            .chars()
            .map(|ch| match ch {
                '#' => Ok(true),
                '.' => Ok(false),
                other => Err(TestError::BadFixture {
                    row,
                    message: format!("unexpected character {:?}", other),
                }),
            })
            .collect::<TestResult<Vec<bool>>>()?;
        cells.push(parsed);
    }
    BinaryMask::from_rows(&cells).map_err(|e| TestError::BadFixture {
        row: 0,
        message: e.to_string(),
    })
}

/// Generate a reproducible pseudo-random mask.
///
/// Each cell is foreground with probability `density_percent / 100`.
pub fn random_mask(width: u32, height: u32, density_percent: u32, seed: u32) -> BinaryMask {
    let mut rng = SimpleRng::new(seed);
    BinaryMask::from_fn(width, height, |_| rng.next_percent() < density_percent)
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Knuth's MMIX
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_percent(&mut self) -> u32 {
        // High bits of an LCG are the well-mixed ones.
        ((self.next() >> 33) % 100) as u32
    }
}

/// Load an image fixture and threshold it into a mask.
pub fn load_test_mask(name: &str, options: &ThresholdOptions) -> TestResult<BinaryMask> {
    let path = test_data_path(name);
    cellscope_io::read_mask(&path, options).map_err(|e| TestError::MaskLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // cellscope-test is at crates/cellscope-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/masks/{}", workspace_root(), name)
}

//! Regression test parameters and operations

use cellscope_core::{BinaryMask, LabelingResult};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and report failures only (default)
    #[default]
    Compare,
    /// Compare and also print every comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current comparison, and every failure seen so far. Comparisons never
/// panic; call [`cleanup`](Self::cleanup) at the end and assert on it.
pub struct RegParams {
    /// Name of the test (e.g., "conncomp")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is read from the `REGTEST_MODE` environment variable.
    /// Logging is initialized so `RUST_LOG` applies to the code under test.
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if self.display() {
            eprintln!("  [{}] expected {} actual {}", self.index, expected, actual);
        }

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two labeling results for exact equality
    ///
    /// Blob order and coordinate order inside each blob must both match.
    pub fn compare_blobs(&mut self, expected: &LabelingResult, actual: &LabelingResult) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("  [{}] blobs:\n{}", self.index, format_blobs(actual));
        }

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: blob comparison for index {}\n\
                 expected:\n{}actual:\n{}",
                self.test_name,
                self.index,
                format_blobs(expected),
                format_blobs(actual)
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two masks for exact equality
    pub fn compare_masks(&mut self, mask1: &BinaryMask, mask2: &BinaryMask) -> bool {
        self.index += 1;

        if mask1.dimensions() != mask2.dimensions() {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - dimension mismatch \
                 {:?} vs {:?}",
                self.test_name,
                self.index,
                mask1.dimensions(),
                mask2.dimensions()
            );
            self.fail(msg);
            return false;
        }

        if let Some(i) = mask1
            .as_slice()
            .iter()
            .zip(mask2.as_slice())
            .position(|(a, b)| a != b)
        {
            let coord = cellscope_core::PixelCoordinate::from_index(i, mask1.width());
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - cell mismatch at {}",
                self.test_name, self.index, coord
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// One line per blob: `index: (r, c) (r, c) ...`
pub fn format_blobs(result: &LabelingResult) -> String {
    let mut out = String::new();
    for (i, blob) in result.iter().enumerate() {
        out.push_str(&format!("{}:", i));
        for c in blob {
            out.push_str(&format!(" {}", c));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellscope_core::{Blob, PixelCoordinate};

    #[test]
    fn test_compare_values_records_failure() {
        let mut rp = RegParams::new("params_self");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 2);
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_masks() {
        let mut rp = RegParams::new("params_masks");
        let a = BinaryMask::new(2, 2);
        let mut b = a.clone();
        assert!(rp.compare_masks(&a, &b));
        b.set(PixelCoordinate::new(1, 0), true).unwrap();
        assert!(!rp.compare_masks(&a, &b));
        assert!(rp.failures()[0].contains("(1, 0)"));
        assert!(!rp.compare_masks(&a, &BinaryMask::new(3, 2)));
    }

    #[test]
    fn test_format_blobs() {
        let result: LabelingResult = vec![
            Blob::new(vec![PixelCoordinate::new(0, 0), PixelCoordinate::new(0, 1)]).unwrap(),
            Blob::from_seed(PixelCoordinate::new(2, 2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(format_blobs(&result), "0: (0, 0) (0, 1)\n1: (2, 2)\n");
    }
}

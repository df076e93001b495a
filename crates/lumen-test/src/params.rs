//! Regression test parameters and comparisons

use lumen_core::{FPix, Pix};

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, the index of
/// the current comparison, and every recorded failure. Comparisons never
/// panic; the test asserts on [`RegParams::cleanup`] at the end so that
/// all failures of a run are reported together.
pub struct RegParams {
    /// Name of the test (e.g., "bilateral")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
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

        if diff > delta || diff.is_nan() {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Record a boolean check
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if condition {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg)
        }
    }

    /// Compare two images for exact equality
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.compare_pix_within(pix1, pix2, 0)
    }

    /// Compare two images, allowing every sample to differ by `tolerance`
    ///
    /// # Returns
    ///
    /// `true` if geometry matches and every sample is within tolerance.
    pub fn compare_pix_within(&mut self, pix1: &Pix, pix2: &Pix, tolerance: u8) -> bool {
        self.index += 1;

        match pix1.max_abs_diff(pix2) {
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.fail(msg)
            }
            Ok(diff) if diff > tolerance => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - max sample \
                     difference {} exceeds tolerance {}",
                    self.test_name, self.index, diff, tolerance
                );
                self.fail(msg)
            }
            Ok(_) => true,
        }
    }

    /// Compare two floating-point images within an absolute tolerance
    pub fn compare_fpix_within(&mut self, fpix1: &FPix, fpix2: &FPix, tolerance: f32) -> bool {
        self.index += 1;

        match fpix1.max_abs_diff(fpix2) {
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: fpix comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.fail(msg)
            }
            Ok(diff) if diff > tolerance || diff.is_nan() => {
                let msg = format!(
                    "Failure in {}_reg: fpix comparison for index {} - max sample \
                     difference {} exceeds tolerance {}",
                    self.test_name, self.index, diff, tolerance
                );
                self.fail(msg)
            }
            Ok(_) => true,
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Channels;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_values_nan_fails() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(1.0, f64::NAN, 10.0));
    }

    #[test]
    fn test_compare_pix_within() {
        let a = Pix::from_data(2, 1, Channels::Gray, vec![10, 20]).unwrap();
        let b = Pix::from_data(2, 1, Channels::Gray, vec![11, 20]).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_pix_within(&a, &b, 1));
        assert!(!rp.compare_pix(&a, &b));
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_pix_geometry_mismatch() {
        let a = Pix::new(2, 2, Channels::Gray).unwrap();
        let b = Pix::new(2, 2, Channels::Rgb).unwrap();
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_pix(&a, &b));
    }
}

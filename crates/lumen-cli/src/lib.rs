//! lumen-cli - transform runners shared by the `lumen` binary
//!
//! Each runner executes one transform in the selected [`Mode`], logs its
//! wall-clock time, and in [`Mode::Both`] also reports how far the parallel
//! output strays from the sequential reference.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use log::info;
use lumen_core::{FPix, Pix};
use lumen_filter::{BilateralParams, bilateral_filter, bilateral_filter_reference};
use lumen_tonemap::{ToneMapParams, tone_map_reference, tone_map_with};
use std::path::Path;
use std::time::Instant;

/// Execution path for a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Data-parallel path
    Parallel,
    /// Sequential reference path
    Reference,
    /// Both paths, timed and compared; the parallel result is kept
    Both,
}

/// Run `f`, logging its elapsed time under `label`.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    info!("{label}: {:.3?}", start.elapsed());
    out
}

fn report_agreement(transform: &str, parallel: &Pix, reference: &Pix) -> Result<u8> {
    let diff = parallel
        .max_abs_diff(reference)
        .with_context(|| format!("{transform}: comparing parallel and reference output"))?;
    info!("{transform}: max difference parallel vs reference = {diff}");
    Ok(diff)
}

/// Bilateral-filter `pix` in `mode`.
pub fn run_bilateral(pix: &Pix, params: &BilateralParams, mode: Mode) -> Result<Pix> {
    let parallel = || timed("bilateral (parallel)", || bilateral_filter(pix, params));
    let reference = || timed("bilateral (reference)", || bilateral_filter_reference(pix, params));

    let out = match mode {
        Mode::Parallel => parallel()?,
        Mode::Reference => reference()?,
        Mode::Both => {
            let reference = reference()?;
            let parallel = parallel()?;
            report_agreement("bilateral", &parallel, &reference)?;
            parallel
        }
    };
    Ok(out)
}

/// Tone map `fpix` in `mode`.
pub fn run_tone_map(fpix: &FPix, params: &ToneMapParams, mode: Mode) -> Result<Pix> {
    let parallel = || timed("tone map (parallel)", || tone_map_with(fpix, params));
    let reference = || timed("tone map (reference)", || tone_map_reference(fpix, params));

    let out = match mode {
        Mode::Parallel => parallel()?,
        Mode::Reference => reference()?,
        Mode::Both => {
            let reference = reference()?;
            let parallel = parallel()?;
            report_agreement("tone map", &parallel, &reference)?;
            parallel
        }
    };
    Ok(out)
}

/// Read, filter and write an 8-bit image.
pub fn bilateral_file(
    input: &Path,
    output: &Path,
    params: &BilateralParams,
    mode: Mode,
) -> Result<()> {
    let pix = lumen_io::read_pix(input)
        .with_context(|| format!("reading {}", input.display()))?;
    info!(
        "loaded {} ({}x{}, {:?})",
        input.display(),
        pix.width(),
        pix.height(),
        pix.channels()
    );
    let out = run_bilateral(&pix, params, mode)?;
    lumen_io::write_pix(&out, output).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

/// Read an HDR image, tone map it and write the 8-bit result.
pub fn tone_map_file(
    input: &Path,
    output: &Path,
    params: &ToneMapParams,
    mode: Mode,
) -> Result<()> {
    let fpix = lumen_io::read_fpix(input)
        .with_context(|| format!("reading {}", input.display()))?;
    if !fpix.is_finite() {
        bail!("{} holds non-finite samples", input.display());
    }
    info!(
        "loaded {} ({}x{}, {:?})",
        input.display(),
        fpix.width(),
        fpix.height(),
        fpix.channels()
    );
    let out = run_tone_map(&fpix, params, mode)?;
    lumen_io::write_pix(&out, output).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

use std::path::Path;

use crate::analysis::DistributionSample;
use crate::report::Report;
use crate::{CalculationResult, Calculator, Error, LineParameters};

/// Describes a single analysis run.
pub struct RunDescriptor<P: AsRef<Path>> {
    /// The line to analyze.
    pub parameters: LineParameters,
    /// Resolution of the sampled distribution, or the configured default.
    pub point_count: Option<usize>,
    /// Whether or not to print the report to the console.
    pub verbose: bool,
    /// Where, if anywhere, to save the analysis.
    pub save_settings: Option<SaveSettings<P>>,
}

/// How an analysis should be saved to file.
#[derive(Debug)]
pub struct SaveSettings<P: AsRef<Path>> {
    /// The path to the HDF5 file.
    pub filename: P,
    /// Whether to recreate the file instead of appending to it.
    pub overwrite: bool,
}

/// The outcome of a run: the derived metrics and the sampled distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub result: CalculationResult,
    pub distribution: DistributionSample,
}

const GROUP_PREFIX: &str = "analysis_";

impl Calculator {
    /// Validates, calculates and samples a line, optionally reporting and saving it.
    pub fn run<P: AsRef<Path>>(&self, desc: RunDescriptor<P>) -> Result<Analysis, Error> {
        let result = self.calculate(&desc.parameters)?;
        let distribution = match desc.point_count {
            Some(point_count) => self.sample_distribution(&result, point_count)?,
            None => self.sample_default(&result)?,
        };
        let analysis = Analysis { result, distribution };

        if desc.verbose {
            println!("{}", Report::new(&analysis.result));
        }

        if let Some(SaveSettings { ref filename, overwrite }) = desc.save_settings {
            let group_name = save(&analysis, filename.as_ref(), overwrite)?;
            if desc.verbose {
                println!("Saved {} to {}", group_name, filename.as_ref().display());
            }
        }

        Ok(analysis)
    }

    /// Calculates every parameter set independently. A failing entry does not stop the
    /// remaining ones.
    pub fn run_batch(
        &self,
        parameters: &[LineParameters],
        verbose: bool,
    ) -> Vec<Result<CalculationResult, Error>> {
        let bar = if verbose {
            println!("# of parameter sets: {}", parameters.len());
            Some(indicatif::ProgressBar::new(parameters.len() as u64))
        } else {
            None
        };

        let results = parameters
            .iter()
            .map(|params| {
                let result = self.calculate(params);
                if let Some(ref bar) = bar {
                    bar.inc(1);
                }
                result
            })
            .collect::<Vec<_>>();

        if let Some(ref bar) = bar {
            bar.finish();
            let failed = results.iter().filter(|r| r.is_err()).count();
            println!("# of failed parameter sets: {}", failed);
        }

        results
    }
}

/// Writes an analysis into a new group of an HDF5 file and returns the group name.
fn save(analysis: &Analysis, filename: &Path, overwrite: bool) -> Result<String, Error> {
    let file = if filename.exists() && !overwrite {
        hdf5::File::append(filename)?
    } else {
        hdf5::File::create(filename)?
    };

    let previous = file
        .member_names()?
        .iter()
        .filter(|name| name.starts_with(GROUP_PREFIX))
        .count();
    let group_name = format!("{}{}", GROUP_PREFIX, previous);
    let group = file.create_group(&group_name)?;

    // inputs and scalar metrics as attributes
    let result = &analysis.result;
    let params = &result.parameters;
    let scalars = [
        ("z0", params.z0),
        ("resistance", params.resistance),
        ("reactance", params.reactance),
        ("frequency", params.frequency),
        ("length", params.length),
        ("gamma_real", result.reflection_coefficient.real),
        ("gamma_imag", result.reflection_coefficient.imag),
        ("gamma_magnitude", result.gamma_magnitude),
        ("gamma_angle_degrees", result.gamma_angle_degrees),
        ("vswr", result.vswr),
        ("return_loss_db", result.return_loss_db),
        ("wavelength", result.wavelength),
        ("first_max_distance", result.first_max_distance),
        ("first_min_distance", result.first_min_distance),
        ("max_voltage", analysis.distribution.max_voltage),
        ("max_current", analysis.distribution.max_current),
    ];
    for (name, value) in scalars {
        group.new_attr::<f64>()
            .shape(hdf5::Extents::Scalar)
            .create(name)?
            .write_scalar(&value)?;
    }

    // sampled distribution
    let dist = &analysis.distribution;
    for (name, series) in [
        ("positions", &dist.positions),
        ("voltages", &dist.voltages),
        ("currents", &dist.currents),
    ] {
        group.new_dataset::<f64>()
            .shape(series.len())
            .create(name)?
            .write(series)?;
    }

    // extrema lists may be empty on short lines
    for (name, positions) in [
        ("max_positions", &result.voltage_max_positions),
        ("min_positions", &result.voltage_min_positions),
    ] {
        let dataset = group.new_dataset::<f64>()
            .shape(positions.len())
            .create(name)?;
        if !positions.is_empty() {
            dataset.write_raw(positions)?;
        }
    }

    drop(group);
    file.close()?;

    Ok(group_name)
}

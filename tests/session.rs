use std::path::PathBuf;

use tline_calc::prelude::*;

// ═══════════════════════════════════════════════════════════════════
//  Runs, batches and HDF5 output
// ═══════════════════════════════════════════════════════════════════

fn temp_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tline_calc_{}_{}.h5", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn run_without_saving() {
    let analysis = Calculator::default()
        .run(RunDescriptor::<&str> {
            parameters: LineParameters::default(),
            point_count: Some(50),
            verbose: false,
            save_settings: None,
        })
        .unwrap();

    assert_eq!(analysis.distribution.len(), 51);
    assert_eq!(analysis.result.parameters, LineParameters::default());
}

#[test]
fn run_uses_default_resolution() {
    let analysis = Calculator::default()
        .run(RunDescriptor::<&str> {
            parameters: LineParameters::default(),
            point_count: None,
            verbose: false,
            save_settings: None,
        })
        .unwrap();

    assert_eq!(analysis.distribution.len(), 201);
}

#[test]
fn run_rejects_invalid_input() {
    let err = Calculator::default()
        .run(RunDescriptor::<&str> {
            parameters: LineParameters { z0: 20.0, ..Default::default() },
            point_count: None,
            verbose: false,
            save_settings: None,
        })
        .unwrap_err();

    assert_eq!(err.field(), Some(Field::Z0));
}

#[test]
fn batch_keeps_going_after_failures() {
    let params = [
        LineParameters::default(),
        LineParameters { z0: 20.0, ..Default::default() },
        LineParameters { resistance: -1.0, ..Default::default() },
        LineParameters { resistance: 50.0, reactance: 0.0, ..Default::default() },
    ];
    let results = Calculator::default().run_batch(&params, false);

    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().field(), Some(Field::Z0));
    assert_eq!(results[2].as_ref().unwrap_err().field(), Some(Field::Resistance));
    assert_eq!(results[3].as_ref().unwrap().vswr, 1.0);
}

#[test]
fn saves_analysis_to_hdf5() {
    let path = temp_file("save");
    let analysis = Calculator::default()
        .run(RunDescriptor {
            parameters: LineParameters::default(),
            point_count: Some(100),
            verbose: false,
            save_settings: Some(SaveSettings { filename: &path, overwrite: true }),
        })
        .unwrap();

    let file = hdf5::File::open(&path).unwrap();
    let group = file.group("analysis_0").unwrap();

    let voltages = group.dataset("voltages").unwrap().read_1d::<f64>().unwrap();
    assert_eq!(voltages, analysis.distribution.voltages);

    let max_positions = group.dataset("max_positions").unwrap().read_raw::<f64>().unwrap();
    assert_eq!(max_positions, analysis.result.voltage_max_positions);

    let vswr = group.attr("vswr").unwrap().read_scalar::<f64>().unwrap();
    assert_eq!(vswr, analysis.result.vswr);

    drop(group);
    file.close().unwrap();
    let _ = std::fs::remove_file(&path);
}

#[test]
fn saves_empty_extrema_lists() {
    let path = temp_file("short_line");
    let analysis = Calculator::default()
        .run(RunDescriptor {
            parameters: LineParameters { length: 0.1, ..Default::default() },
            point_count: Some(10),
            verbose: false,
            save_settings: Some(SaveSettings { filename: &path, overwrite: true }),
        })
        .unwrap();
    assert!(analysis.result.voltage_max_positions.is_empty());
    assert!(analysis.result.voltage_min_positions.is_empty());

    let file = hdf5::File::open(&path).unwrap();
    let group = file.group("analysis_0").unwrap();
    for name in ["max_positions", "min_positions"] {
        let dataset = group.dataset(name).unwrap();
        assert_eq!(dataset.shape(), vec![0], "{name}");
        assert!(dataset.read_raw::<f64>().unwrap().is_empty(), "{name}");
    }
    let positions = group.dataset("positions").unwrap().read_1d::<f64>().unwrap();
    assert_eq!(positions.len(), 11);

    drop(group);
    file.close().unwrap();
    let _ = std::fs::remove_file(&path);
}

#[test]
fn appends_groups_unless_overwriting() {
    let path = temp_file("append");
    let calc = Calculator::default();
    let run = |overwrite| {
        calc.run(RunDescriptor {
            parameters: LineParameters::default(),
            point_count: Some(10),
            verbose: false,
            save_settings: Some(SaveSettings { filename: &path, overwrite }),
        })
        .unwrap();
    };

    run(true);
    run(false);
    run(false);
    {
        let file = hdf5::File::open(&path).unwrap();
        let mut names = file.member_names().unwrap();
        names.sort();
        assert_eq!(names, vec!["analysis_0", "analysis_1", "analysis_2"]);
        file.close().unwrap();
    }

    run(true);
    {
        let file = hdf5::File::open(&path).unwrap();
        assert_eq!(file.member_names().unwrap(), vec!["analysis_0"]);
        file.close().unwrap();
    }
    let _ = std::fs::remove_file(&path);
}

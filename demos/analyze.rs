use tline_calc::prelude::*;

fn main() {
    let calculator = Calculator::new(CalculatorConfig::default());

    // 50 Ω line into a 75 + j30 Ω load at 100 MHz
    let parameters = LineParameters::from_units(
        50.0, // [Ω]
        75.0, // [Ω]
        30.0, // [Ω]
        100.0,
        FrequencyUnit::MHz,
        2.0,
        LengthUnit::Meter,
    );

    std::fs::create_dir_all("data").unwrap();

    println!("-- Single Analysis --");
    let analysis = calculator.run(RunDescriptor {
        parameters,
        point_count: Some(400),
        verbose: true,
        save_settings: Some(SaveSettings {
            filename: "data/analysis.h5",
            overwrite: true,
        }),
    })
    .unwrap();

    println!(
        "\n-- Distribution --\n\
        # of samples: {}\n\
        peak |V|:     {:<9.4}\n\
        peak |I|:     {:<9.4}\n",
        analysis.distribution.len(),
        analysis.distribution.max_voltage,
        analysis.distribution.max_current,
    );

    println!("-- Load Batch --");
    // a handful of loads on the same line, one of them invalid
    let loads = [(0.0, 0.0), (25.0, -40.0), (50.0, 0.0), (-10.0, 5.0), (1e6, 0.0)];
    let batch = loads
        .iter()
        .map(|&(resistance, reactance)| LineParameters { resistance, reactance, ..parameters })
        .collect::<Vec<_>>();

    for (params, result) in batch.iter().zip(calculator.run_batch(&batch, true)) {
        match result {
            Ok(r) => println!(
                "ZL = {:>9.1} {:+.1}j Ω  ->  VSWR {:>8}  RL {:>8}",
                params.resistance,
                params.reactance,
                tline_calc::report::format_vswr(r.vswr),
                tline_calc::report::format_return_loss(r.return_loss_db),
            ),
            Err(err) => println!("ZL = {:>9.1} {:+.1}j Ω  ->  {}", params.resistance, params.reactance, err),
        }
    }
}

//! Demo: temperature-programmed separation of the default analyte mix
//!
//! Runs the reference scenario headlessly — 800 particles uniformly split
//! across the eight analyte classes, helium carrier at 30 psi, 60 → 280 °C
//! at 10 °C/min with one-minute holds — then prints per-class retention
//! statistics and writes the chromatogram as CSV and PNG into the system
//! temp directory.
//!
//! ```bash
//! cargo run --example separation
//! ```

use gcms_rs::models::{AnalyteClass, DistributionMode};
use gcms_rs::output::{
    export_chromatogram_csv, plot_chromatogram, CsvConfig, CsvMetadata, PlotConfig,
};
use gcms_rs::sim::{Simulation, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  GC/MS Separation — Reference Temperature Program");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Instrument configuration ======

    let config = SimulationConfig {
        particle_count: 800,
        distribution: DistributionMode::Uniform,
        ..Default::default()
    };

    println!("Instrument:");
    println!("  Carrier gas     : {}", config.carrier_gas);
    println!("  Pressure        : {} psi", config.carrier_pressure);
    println!("  Split ratio     : {}", config.split_ratio);
    println!("  Column length   : {:.2}x nominal", config.column_length_factor);
    println!(
        "  Oven program    : {} -> {} C at {} C/min, holds {}/{} min",
        config.start_temp, config.end_temp, config.ramp_rate, config.initial_hold, config.final_hold
    );
    println!("  Particles       : {}\n", config.particle_count);

    // ====== Run the simulation ======

    let dt = 0.5;
    let total_time = 120.0;
    let ticks = (total_time / dt) as usize;

    let mut sim = Simulation::with_seed(config.clone(), 42)?;
    sim.inject()?;
    for _ in 0..ticks {
        sim.tick(dt);
    }

    let oven = sim.oven_state();
    println!("Run complete:");
    println!("  Elapsed         : {} time units", sim.elapsed());
    println!("  Oven            : {:.1} C", oven.temperature);
    println!("  Detections      : {} / {}\n", sim.detector().total(), sim.particles().len());

    // ====== Per-class retention statistics ======

    println!("{:<12} {:>8} {:>10} {:>12} {:>12}", "Class", "RF", "Detected", "Mean t", "Spread");
    println!("{:-<58}", "");

    for class in AnalyteClass::ALL {
        let times = sim.detector().times(class);
        let nominal = config.nominal_retention(class);

        if times.is_empty() {
            println!("{:<12} {:>8.2} {:>10} {:>12} {:>12}", class.label(), nominal, 0, "-", "-");
            continue;
        }

        let n = times.len() as f64;
        let mean = times.iter().sum::<f64>() / n;
        let var = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;

        println!(
            "{:<12} {:>8.2} {:>10} {:>12.2} {:>12.2}",
            class.label(),
            nominal,
            times.len(),
            mean,
            var.sqrt()
        );
    }

    // ====== Export results ======

    let tmp_dir = std::env::temp_dir();
    let csv_path = tmp_dir.join("separation.csv");
    let png_path = tmp_dir.join("separation.png");

    let csv_config = CsvConfig {
        include_metadata: true,
        metadata: Some(CsvMetadata {
            carrier_gas: Some(config.carrier_gas.to_string()),
            particle_count: Some(config.particle_count),
            temperature_program: Some(format!(
                "{}-{} C at {} C/min",
                config.start_temp, config.end_temp, config.ramp_rate
            )),
            elapsed: Some(sim.elapsed()),
        }),
        ..Default::default()
    };
    export_chromatogram_csv(sim.chromatogram(), csv_path.to_str().unwrap(), Some(&csv_config))?;

    let plot_config = PlotConfig::chromatogram("Default Mix, He 30 psi, 60-280 C");
    plot_chromatogram(sim.chromatogram(), png_path.to_str().unwrap(), Some(&plot_config))?;

    println!("\nOutputs:");
    println!("  CSV  : {:?}", csv_path);
    println!("  Plot : {:?}", png_path);

    Ok(())
}

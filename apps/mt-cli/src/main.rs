use clap::{Parser, Subcommand};
use mt_app::{AppResult, Scenario, evaluate, load_scenario};
use mt_core::{ensure_positive, m};
use mt_correlations::{EngineConfig, Geometry, SimulationInput};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mt-cli")]
#[command(about = "masstran CLI - convective mass-transfer correlation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operating point and print Sh, kc, and the analysis
    Compute {
        /// Scenario YAML file; when given, the individual flags are ignored
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Geometry tag (see `geometries` for the catalog)
        #[arg(long, default_value = "sphere")]
        geometry: String,
        /// Reynolds number
        #[arg(long, default_value_t = 1000.0)]
        re: f64,
        /// Schmidt number
        #[arg(long, default_value_t = 500.0)]
        sc: f64,
        /// Binary diffusion coefficient DAB in m^2/s
        #[arg(long, default_value_t = 1e-9)]
        dab: f64,
        /// Compute without a diffusivity (forces the warning path)
        #[arg(long)]
        no_dab: bool,
        /// Characteristic length L in meters for kc = Sh * DAB / L
        #[arg(long, default_value_t = 1.0)]
        length: f64,
        /// Write the evaluated inputs back out as a scenario YAML file
        #[arg(long)]
        save_scenario: Option<PathBuf>,
    },
    /// List the geometry catalog with its correlations
    Geometries,
    /// Export the log-log reference curve as CSV
    ExportCurve {
        /// Geometry tag
        #[arg(long, default_value = "sphere")]
        geometry: String,
        /// Reynolds number
        #[arg(long, default_value_t = 1000.0)]
        re: f64,
        /// Schmidt number
        #[arg(long, default_value_t = 500.0)]
        sc: f64,
        /// Binary diffusion coefficient DAB in m^2/s
        #[arg(long, default_value_t = 1e-9)]
        dab: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            scenario,
            geometry,
            re,
            sc,
            dab,
            no_dab,
            length,
            save_scenario,
        } => cmd_compute(
            scenario.as_deref(),
            &geometry,
            re,
            sc,
            dab,
            no_dab,
            length,
            save_scenario.as_deref(),
        ),
        Commands::Geometries => cmd_geometries(),
        Commands::ExportCurve {
            geometry,
            re,
            sc,
            dab,
            output,
        } => cmd_export_curve(&geometry, re, sc, dab, output.as_deref()),
    }
}

fn build_input(
    scenario: Option<&Path>,
    geometry: &str,
    re: f64,
    sc: f64,
    dab: f64,
    no_dab: bool,
) -> AppResult<SimulationInput> {
    if let Some(path) = scenario {
        println!("Loading scenario: {}", path.display());
        let scenario = load_scenario(path)?;
        return scenario.to_input();
    }
    Ok(SimulationInput::from_tag(
        geometry,
        ensure_positive(re, "Reynolds number")?,
        ensure_positive(sc, "Schmidt number")?,
        !no_dab,
        Some(dab),
    )?)
}

#[allow(clippy::too_many_arguments)]
fn cmd_compute(
    scenario: Option<&Path>,
    geometry: &str,
    re: f64,
    sc: f64,
    dab: f64,
    no_dab: bool,
    length: f64,
    save_scenario: Option<&Path>,
) -> AppResult<()> {
    let input = build_input(scenario, geometry, re, sc, dab, no_dab)?;
    let config = EngineConfig {
        characteristic_length: m(ensure_positive(length, "characteristic length")?),
    };

    let output = evaluate(&config, &input);

    println!(
        "Geometry: {} ({})",
        input.geometry,
        input.geometry.correlation().describe()
    );
    println!("  Re = {}, Sc = {}", input.reynolds, input.schmidt);
    println!("Sherwood number (Sh):       {}", output.sherwood_text);
    println!("Mass-transfer kc [m/s]:     {}", output.kc_text);

    println!("\nAnalysis:");
    for line in output.interpretation_lines() {
        println!("  - {}", line);
    }

    let figure = &output.figure;
    println!(
        "\nChart axes (log10): Sh [{:.1}, {:.1}], kc [{:.1}, {:.1}]",
        figure.sh_axis_log10.0,
        figure.sh_axis_log10.1,
        figure.kc_axis_log10.0,
        figure.kc_axis_log10.1
    );

    if let Some(path) = save_scenario {
        mt_app::save_scenario(path, &Scenario::from_input(&input))?;
        println!("✓ Saved scenario to {}", path.display());
    }

    Ok(())
}

fn cmd_geometries() -> AppResult<()> {
    println!("Supported geometries:");
    for geometry in Geometry::ALL {
        println!(
            "  {:<12} {} - {}",
            geometry.tag(),
            geometry.label(),
            geometry.correlation().describe()
        );
    }
    Ok(())
}

fn cmd_export_curve(
    geometry: &str,
    re: f64,
    sc: f64,
    dab: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let input = SimulationInput::from_tag(
        geometry,
        ensure_positive(re, "Reynolds number")?,
        ensure_positive(sc, "Schmidt number")?,
        true,
        Some(dab),
    )?;
    let evaluated = evaluate(&EngineConfig::default(), &input);

    // Build CSV
    let mut csv = String::from("sh,kc\n");
    for point in &evaluated.figure.reference_line {
        csv.push_str(&format!("{},{}\n", point[0], point[1]));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} curve points to {}",
            evaluated.figure.reference_line.len(),
            path.display()
        );
        println!(
            "  Operating point: Sh = {}, kc = {} m/s",
            evaluated.sherwood_text, evaluated.kc_text
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

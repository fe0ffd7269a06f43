use chart_digitizer::analyze_with;
use chart_digitizer::config::{load_config, RuntimeConfig};
use chart_digitizer::sketch::io::{load_sketch, write_json_file};
use chart_digitizer::Recovery;

use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = load_config_from_args()?;
    let shapes = load_sketch(&config.sketch_path)?;
    match analyze_with(&shapes, &config.options) {
        Ok(recovery) => report(&config, &recovery),
        Err(err) if err.is_not_ready() => {
            println!("Sketch incomplete: {err}");
            Ok(())
        }
        Err(err) => Err(format!("Analysis failed: {err}")),
    }
}

fn report(config: &RuntimeConfig, recovery: &Recovery) -> Result<(), String> {
    print_table(recovery);
    if let Some(path) = &config.output.json_out {
        write_json_file(path, recovery)?;
        println!("\nJSON report written to {}", path.display());
    }
    Ok(())
}

// Values are rounded to one decimal place for presentation only; the JSON
// report carries full precision.
fn print_table(recovery: &Recovery) {
    println!("{:>12}  {:>10}  {:>10}", "color", "x", "y");
    for (color, points) in &recovery.groups {
        for point in points {
            println!("{color:>12}  {:>10.1}  {:>10.1}", point[0], point[1]);
        }
    }
}

fn usage() -> String {
    "Usage: sketch_analyze <config.json>".to_string()
}

fn load_config_from_args() -> Result<RuntimeConfig, String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    load_config(Path::new(&config_path))
}

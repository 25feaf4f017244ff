use std::env;
use std::io::{self, Write};

use chrono::Local;
use plotters::prelude::*;

use noodle_toss::core::ballistics::{
    DragParameters, SimulationState, flight_time_and_range, simulate_trajectory,
};
use noodle_toss::core::window::trajectory_axis_window;

// Pool noodle toss defaults.
const NOODLE_MASS_KG: f64 = 0.15;
const NOODLE_RADIUS_M: f64 = 0.035;
const NOODLE_DRAG_COEFFICIENT: f64 = 1.3;

#[derive(Clone, Copy, Debug)]
struct Inputs {
    vx_mps: f64,
    vy_mps: f64,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn read_f64(prompt: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 8 or 1.71)."),
        }
    }
}

fn get_inputs_from_user() -> Result<Inputs, String> {
    Ok(Inputs {
        vx_mps: read_f64("Horizontal velocity (m/s): ")?,
        vy_mps: read_f64("Vertical velocity (m/s): ")?,
    })
}

fn get_inputs_from_args(args: &[String]) -> Result<Inputs, String> {
    if args.len() != 3 {
        return Err("Expected exactly 2 arguments: <vx_mps> <vy_mps>.".to_string());
    }

    Ok(Inputs {
        vx_mps: parse_f64(&args[1], "horizontal velocity")?,
        vy_mps: parse_f64(&args[2], "vertical velocity")?,
    })
}

fn print_samples(samples: &[SimulationState]) {
    for s in samples {
        println!(
            "Time: {:.2} s, Position: ({:.2}, {:.2}) m, Velocity: ({:.2}, {:.2}) m/s",
            s.time_s, s.x_m, s.y_m, s.vx_mps, s.vy_mps
        );
    }
}

fn write_trajectory_plot(
    samples: &[SimulationState],
    inputs: Inputs,
    filename: &str,
) -> Result<(), String> {
    let root = BitMapBackend::new(filename, (900, 450)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to fill plot background: {e}"))?;

    let (x_span, y_span) = trajectory_axis_window(samples);
    let caption = format!(
        "Pool Noodle Toss (vx={}, vy={})",
        inputs.vx_mps, inputs.vy_mps
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_span, 0.0..y_span)
        .map_err(|e| format!("Failed to build chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Horizontal Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(|e| format!("Failed to draw chart mesh: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.x_m, s.y_m)),
            &BLUE,
        ))
        .map_err(|e| format!("Failed to draw trajectory: {e}"))?;

    root.present()
        .map_err(|e| format!("Failed to write plot to '{filename}': {e}"))?;

    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program}");
    println!("  {program} <vx_mps> <vy_mps>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 8.0 1.71");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let inputs = if args.len() == 1 {
        get_inputs_from_user()?
    } else {
        get_inputs_from_args(&args)?
    };

    let params = DragParameters::round_body(
        NOODLE_MASS_KG,
        NOODLE_RADIUS_M,
        NOODLE_DRAG_COEFFICIENT,
    );
    let samples = simulate_trajectory(params, inputs.vx_mps, inputs.vy_mps)?;

    print_samples(&samples);

    let (flight_time, range) = flight_time_and_range(&samples);
    println!("\nTime of flight: {:.4} s", flight_time);
    println!("Horizontal distance: {:.4} m", range);
    println!("Recorded samples: {}", samples.len());

    let filename = format!(
        "noodle_toss_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    write_trajectory_plot(&samples, inputs, &filename)?;
    println!("Saved trajectory plot to {filename}");

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

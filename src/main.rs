use std::process::ExitCode;

use blocksim::prelude::*;
use log::error;

/// Two steps summed and fed through a first-order lag
///
/// ```text
/// step(ts=1, 0 -> 1) ──┐
///                      ├─ s+t ── 1st-order-delay (T = 0.1)
/// t(ts=2, 0 -> -1) ────┘
/// ```
fn build_demo() -> Result<Recorder> {
    let s = shared(Step::default());
    let t = shared(Step::new("t", 2.0, 0.0, -1.0));
    let sum = shared(Add::new("s+t", vec![s, t]));
    let lag = shared(FirstOrderDelay::lag("1st-order-delay", 0.1, sum.clone())?);

    Recorder::new(vec![lag, sum])
}

fn run(settings_path: Option<String>, output_path: Option<String>) -> Result<()> {
    let settings = match settings_path {
        Some(path) => SimulationSettings::load(path)?,
        None => SimulationSettings::default(),
    };

    let mut recorder = build_demo()?;
    let mut system = System::new();
    system.add(&mut recorder);
    let steps = system.run_with(&settings)?;

    println!(
        "Simulated {} steps (duration {} s, dt {} s)",
        steps, settings.duration, settings.dt
    );
    for series in recorder.iter() {
        if let Some((t, y)) = series.last() {
            println!("  {:<16} t = {:.4}  y = {:.6}", series.name, t, y);
        }
    }

    if let Some(path) = output_path {
        let path = recorder.save_csv(path)?;
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings_path = args.next();
    let output_path = args.next();

    match run(settings_path, output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

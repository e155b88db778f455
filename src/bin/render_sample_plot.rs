use rangeframe::PlotConfig;
use rangeframe::api::PlotBuilder;
use rangeframe::render::Color;
use rangeframe::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            PlotConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => PlotConfig::default().with_series_colors(vec![
            Color::rgb(0.12, 0.47, 0.71),
            Color::rgb(0.84, 0.15, 0.16),
        ]),
    };

    let svg = PlotBuilder::new()
        .with_config(config)
        .add_series(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
            &[0.1, 0.2, 0.7, 0.4, 0.8, 0.6, 0.0, 0.2],
        )
        .and_then(|builder| {
            builder.add_series(
                &[10.0, 11.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0],
                &[0.7, 0.3, 0.1, 0.7, 0.9, 0.3, 0.9, 0.4],
            )
        })
        .and_then(|builder| builder.build())
        .and_then(|plot| plot.draw())
        .map_err(|err| err.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, svg)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            print!("{svg}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                return Err("usage: render_sample_plot [--config <plot.json>] [output.svg]".to_owned());
            }
            other if parsed.output.is_none() => parsed.output = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument `{other}`")),
        }
    }

    Ok(parsed)
}

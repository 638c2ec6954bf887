mod script;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use greenside_golf::{CourseConfig, GolfSession};

use script::Script;

/// Command-line options: `--course=PATH --script=PATH --tick-rate=HZ`.
struct Args {
    course: Option<String>,
    script: Option<String>,
    tick_rate: f32,
}

impl Args {
    fn parse() -> Self {
        let mut args = Self {
            course: None,
            script: None,
            tick_rate: 60.0,
        };
        for arg in std::env::args().skip(1) {
            if let Some(path) = arg.strip_prefix("--course=") {
                args.course = Some(path.to_string());
            } else if let Some(path) = arg.strip_prefix("--script=") {
                args.script = Some(path.to_string());
            } else if let Some(rate) = arg.strip_prefix("--tick-rate=")
                && let Ok(hz) = rate.parse::<f32>()
                && hz > 0.0
            {
                args.tick_rate = hz;
            } else {
                tracing::warn!(arg = %arg, "Ignoring unrecognized argument");
            }
        }
        args
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.course {
        Some(path) => match CourseConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load course {path}: {e}");
                return ExitCode::FAILURE;
            },
        },
        None => CourseConfig::load(),
    };

    let script = match &args.script {
        Some(path) => {
            let parsed = std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|s| Script::from_toml_str(&s).map_err(|e| e.to_string()));
            match parsed {
                Ok(script) => script,
                Err(e) => {
                    tracing::error!("Failed to load script {path}: {e}");
                    return ExitCode::FAILURE;
                },
            }
        },
        None => Script::default(),
    };

    let mut session = match GolfSession::new(config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Invalid course: {e}");
            return ExitCode::FAILURE;
        },
    };

    tracing::info!(
        course = %session.config().name,
        shots = script.shots.len(),
        tick_rate = args.tick_rate,
        "Replaying"
    );

    let replay = script::play(&mut session, &script, 1.0 / args.tick_rate);

    match &replay.result {
        Some(result) => tracing::info!(
            strokes = result.strokes,
            par = result.par,
            term = %result.term,
            "Hole complete"
        ),
        None => tracing::info!(shots = replay.snapshot.shots, "Hole not finished"),
    }

    match serde_json::to_string_pretty(&replay) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!("Failed to encode replay: {e}");
            ExitCode::FAILURE
        },
    }
}

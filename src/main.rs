use std::io::{
    self,
    Write
};
use std::path::{
    Path,
    PathBuf
};
use std::sync::Arc;

use anyhow::Context;
use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum
};

use fuzzymembership::configuration::Configuration;
use fuzzymembership::explorer::parameterrange;
use fuzzymembership::explorer::parameterset::ParameterSet;
use fuzzymembership::manager::manager::IManager;
use fuzzymembership::math::samplegrid::{
    SampleGrid,
    DEFAULT_GRID_END,
    DEFAULT_GRID_POINTS,
    DEFAULT_GRID_START
};
use fuzzymembership::membership::curveresult::CurveResult;
use fuzzymembership::membership::membershipfunctiontype::MembershipFunctionType;

/// Evaluate fuzzy membership functions over a sample grid
#[derive(Parser)]
#[command(name = "fuzzymembership")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate triangular, gaussian, trapezoidal, bell and sigmoidal membership functions")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Triangular membership function (requires a < b < c)
    Triangular {
        /// Left foot
        #[arg(long, allow_negative_numbers = true)]
        a: Option<f64>,
        /// Peak
        #[arg(long, allow_negative_numbers = true)]
        b: Option<f64>,
        /// Right foot
        #[arg(long, allow_negative_numbers = true)]
        c: Option<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Gaussian membership function
    Gaussian {
        #[arg(long, allow_negative_numbers = true)]
        mean: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        sigma: Option<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Trapezoidal membership function (requires a < b < c < d)
    Trapezoidal {
        /// Left foot
        #[arg(long, allow_negative_numbers = true)]
        a: Option<f64>,
        /// Left shoulder
        #[arg(long, allow_negative_numbers = true)]
        b: Option<f64>,
        /// Right shoulder
        #[arg(long, allow_negative_numbers = true)]
        c: Option<f64>,
        /// Right foot
        #[arg(long, allow_negative_numbers = true)]
        d: Option<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generalized bell membership function
    Bell {
        /// Width
        #[arg(long, allow_negative_numbers = true)]
        a: Option<f64>,
        /// Slope
        #[arg(long, allow_negative_numbers = true)]
        b: Option<f64>,
        /// Center
        #[arg(long, allow_negative_numbers = true)]
        c: Option<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Sigmoidal membership function
    Sigmoidal {
        /// Slope
        #[arg(long, allow_negative_numbers = true)]
        a: Option<f64>,
        /// Inflection point
        #[arg(long, allow_negative_numbers = true)]
        c: Option<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Evaluate a named preset from a configuration file
    Preset {
        /// Configuration file
        #[arg(long)]
        config: PathBuf,
        /// Preset name
        name: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// List the presets in a configuration file
    Presets {
        /// Configuration file
        #[arg(long)]
        config: PathBuf,
    },
    /// Show equation and parameter ranges
    Describe {
        /// Function name; all functions when omitted
        function: Option<String>,
    },
}

#[derive(Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Keep parameters outside the slider ranges as given
    #[arg(long)]
    no_clamp: bool,
    /// Number of grid points (at most 10000000)
    #[arg(long, default_value_t = DEFAULT_GRID_POINTS)]
    points: usize,
    #[arg(long, default_value_t = DEFAULT_GRID_START, allow_negative_numbers = true)]
    start: f64,
    #[arg(long, default_value_t = DEFAULT_GRID_END, allow_negative_numbers = true)]
    end: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }

    match cli.command {
        Commands::Triangular { a, b, c, output } => {
            let parameter_set = ParameterSet::Triangular {
                a: a.unwrap_or(parameterrange::TRIANGULAR_A.default()),
                b: b.unwrap_or(parameterrange::TRIANGULAR_B.default()),
                c: c.unwrap_or(parameterrange::TRIANGULAR_C.default()),
            };
            evaluate(parameter_set, &output)
        }
        Commands::Gaussian { mean, sigma, output } => {
            let parameter_set = ParameterSet::Gaussian {
                mean: mean.unwrap_or(parameterrange::GAUSSIAN_MEAN.default()),
                sigma: sigma.unwrap_or(parameterrange::GAUSSIAN_SIGMA.default()),
            };
            evaluate(parameter_set, &output)
        }
        Commands::Trapezoidal { a, b, c, d, output } => {
            let parameter_set = ParameterSet::Trapezoidal {
                a: a.unwrap_or(parameterrange::TRAPEZOIDAL_A.default()),
                b: b.unwrap_or(parameterrange::TRAPEZOIDAL_B.default()),
                c: c.unwrap_or(parameterrange::TRAPEZOIDAL_C.default()),
                d: d.unwrap_or(parameterrange::TRAPEZOIDAL_D.default()),
            };
            evaluate(parameter_set, &output)
        }
        Commands::Bell { a, b, c, output } => {
            let parameter_set = ParameterSet::Bell {
                a: a.unwrap_or(parameterrange::BELL_A.default()),
                b: b.unwrap_or(parameterrange::BELL_B.default()),
                c: c.unwrap_or(parameterrange::BELL_C.default()),
            };
            evaluate(parameter_set, &output)
        }
        Commands::Sigmoidal { a, c, output } => {
            let parameter_set = ParameterSet::Sigmoidal {
                a: a.unwrap_or(parameterrange::SIGMOIDAL_A.default()),
                c: c.unwrap_or(parameterrange::SIGMOIDAL_C.default()),
            };
            evaluate(parameter_set, &output)
        }
        Commands::Preset { config, name, format } => {
            let configuration = load_configuration(&config)?;
            let membership_function = configuration.membership_function_manager().get(&name)?;
            log::debug!("preset '{}' is {}", name, membership_function.parameter_set());
            let curve = membership_function.evaluate(&configuration.grid());
            write_curve(&curve, format)
        }
        Commands::Presets { config } => {
            let configuration = load_configuration(&config)?;
            let mut out = io::stdout().lock();
            for name in configuration.preset_names() {
                let membership_function = configuration.membership_function_manager().get(&name)?;
                writeln!(out, "{}\t{}", name, membership_function.parameter_set())?;
            }
            Ok(())
        }
        Commands::Describe { function } => {
            let function_types = match function {
                Some(name) => vec![name.parse::<MembershipFunctionType>()?],
                None => MembershipFunctionType::ALL.to_vec(),
            };
            describe(&function_types)
        }
    }
}

fn load_configuration(path: &Path) -> anyhow::Result<Configuration> {
    let configuration = Configuration::new();
    configuration
        .from_reader(path)
        .with_context(|| format!("failed to load configuration {}", path.display()))?;
    Ok(configuration)
}

fn evaluate(parameter_set: ParameterSet, output: &OutputArgs) -> anyhow::Result<()> {
    let parameter_set = parameter_set.for_input(!output.no_clamp);
    let grid = Arc::new(SampleGrid::checked(output.start, output.end, output.points)?);
    let curve = parameter_set.evaluate(&grid)?;
    write_curve(&curve, output.format)
}

fn write_curve(curve: &CurveResult, format: OutputFormat) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Csv => curve.write_csv(&mut out)?,
        OutputFormat::Json => {
            curve.write_json(&mut out)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn describe(function_types: &[MembershipFunctionType]) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for function_type in function_types {
        let defaults = ParameterSet::default_for(*function_type);
        writeln!(out, "{}", function_type.title())?;
        writeln!(out, "  {}", function_type.equation())?;
        for (name, range) in function_type.parameter_names().iter().zip(defaults.ranges()) {
            writeln!(
                out,
                "  {:<6} [{}, {}] default {}",
                name,
                range.min(),
                range.max(),
                range.default()
            )?;
        }
    }
    Ok(())
}

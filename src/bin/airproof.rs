use airproof::{compute_from_value, TestType, WeatherContext};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "airproof")]
#[command(about = "Commissioning test computation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Computes the result for a single field reading
    Compute {
        /// Test type discriminant (e.g., "BUILDING_PRESSURE")
        #[arg(short, long)]
        test_type: String,

        /// Path to the JSON reading payload
        #[arg(short, long)]
        input: PathBuf,

        /// Outdoor dry bulb (°F) from the session weather
        #[arg(long)]
        outdoor_temp: Option<f64>,

        /// Outdoor relative humidity (%) from the session weather
        #[arg(long)]
        outdoor_rh: Option<f64>,

        /// Output format
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output_file: Option<PathBuf>,
    },

    /// Lists the recognized test types
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            test_type,
            input,
            outdoor_temp,
            outdoor_rh,
            format,
            output_file,
        } => {
            let payload = std::fs::read_to_string(&input)?;
            let payload: serde_json::Value = serde_json::from_str(&payload)?;

            let weather = WeatherContext::new(outdoor_temp, outdoor_rh);
            let result = compute_from_value(&test_type, payload, Some(&weather))?;

            let output = match format.as_str() {
                "markdown" => result.to_markdown(),
                "json" => serde_json::to_string_pretty(&result)?,
                _ => anyhow::bail!("Unsupported format: {}", format),
            };

            if let Some(path) = output_file {
                std::fs::write(&path, output)?;
                println!("Result saved to {:?}", path);
            } else {
                println!("{}", output);
            }
        }
        Commands::Types => {
            for test_type in TestType::ALL {
                println!("{:<22} {}", test_type.as_str(), test_type.display_name());
            }
        }
    }

    Ok(())
}

//! Command-line front end for the bulb tools.
//!
//! Run with: wiz-bulb-tools --help

use std::net::Ipv4Addr;

use clap::{Parser, Subcommand};
use log::info;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use wiz_bulb_tools::{DeviceEndpoint, Tool, ToolBox};

#[derive(Parser)]
#[command(name = "wiz-bulb-tools")]
#[command(about = "Drive a Wiz smart bulb through intent-level tools", long_about = None)]
struct Cli {
    /// IP address of the bulb (overrides WIZ_BULB_IP)
    #[arg(short, long, global = true)]
    ip: Option<Ipv4Addr>,

    /// UDP port of the bulb (overrides WIZ_BULB_PORT)
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tool catalog as JSON
    Tools,

    /// Call a tool by name with JSON arguments
    Call {
        /// Tool name, e.g. adjust_brightness
        name: String,
        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Turn the light off
    Off,

    /// Set warm white
    WarmWhite {
        /// Brightness level (0-100)
        #[arg(default_value_t = 100, allow_negative_numbers = true)]
        dimming: i64,
    },

    /// Set daylight
    Daylight {
        /// Brightness level (0-100)
        #[arg(default_value_t = 100, allow_negative_numbers = true)]
        dimming: i64,
    },

    /// Change brightness, keeping the current scene
    Brightness {
        /// Brightness level (0-100)
        #[arg(allow_negative_numbers = true)]
        percent: i64,
    },

    /// Get the current status of the light
    Status,

    /// Show the configured bulb
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so tool output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let from_env = DeviceEndpoint::from_env()?;
    let endpoint = DeviceEndpoint::new(
        cli.ip.unwrap_or(from_env.ip()),
        cli.port.unwrap_or(from_env.port()),
    );

    info!("Starting Wiz bulb tools");
    info!("Light IP: {}", endpoint.ip());
    info!("Light Port: {}", endpoint.port());
    info!(
        "Available tools: {}",
        Tool::catalog()
            .iter()
            .map(|spec| spec.name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let tools = ToolBox::new(endpoint);

    let outcome = match cli.command {
        Commands::Tools => serde_json::to_string_pretty(&Tool::catalog())?,
        Commands::Call { name, args } => {
            let arguments: Value = serde_json::from_str(&args)?;
            tools.call(&name, &arguments).await
        }
        Commands::Off => tools.invoke(Tool::TurnOffBulb, &json!({})).await,
        Commands::WarmWhite { dimming } => {
            tools
                .invoke(Tool::SetWarmWhite, &json!({ "dimming": dimming }))
                .await
        }
        Commands::Daylight { dimming } => {
            tools
                .invoke(Tool::SetDaylight, &json!({ "dimming": dimming }))
                .await
        }
        Commands::Brightness { percent } => {
            tools
                .invoke(
                    Tool::AdjustBrightness,
                    &json!({ "brightness_percent": percent }),
                )
                .await
        }
        Commands::Status => tools.invoke(Tool::GetBulbStatus, &json!({})).await,
        Commands::Info => tools.invoke(Tool::GetBulbInfo, &json!({})).await,
    };

    println!("{}", outcome);
    Ok(())
}

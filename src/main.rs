use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use meraki_bssid::{
    BandPolicy, BssidCalculator, BssidRecord, Bssids, HardwareFamily, Inventory, MacAddress,
    OffsetEntry, OverflowPolicy, RadioBand, SsidIndex,
    config::{self, Config},
    inventory,
};

#[derive(Parser)]
#[command(name = "meraki-bssid")]
#[command(about = "Calculate the BSSIDs Meraki MR access points derive from their MAC address")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output (inventory only)
    Csv,
}

const CSV_INVENTORY_ONLY: &str = "CSV output is only available for the inventory command";

#[derive(Subcommand)]
enum Commands {
    /// Calculate the BSSIDs of one SSID on one access point
    Calculate {
        /// Access point model (e.g. MR53)
        model: String,

        /// Base MAC address of the access point
        mac: String,

        /// SSID index, starting at 1
        ssid: SsidIndex,

        /// Return only the bands the table knows instead of failing on a missing one
        #[arg(short, long)]
        lenient: bool,

        /// Octet overflow handling (overrides the config file)
        #[arg(short, long)]
        overflow: Option<String>,
    },

    /// Show the offsets an access point uses for every band and SSID
    Offsets {
        /// Access point model (e.g. MR53)
        model: String,

        /// Base MAC address of the access point
        mac: String,
    },

    /// List known access point models and their hardware family
    Models,

    /// Calculate BSSIDs for every enabled SSID of every AP in an inventory file
    Inventory {
        /// JSON inventory exported from the dashboard
        file: PathBuf,

        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Save a model alias to the config file
    AddModel {
        /// Model name
        model: String,

        /// Hardware family the model shares arithmetic with
        family: u8,
    },

    /// Show configuration path and settings
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("meraki_bssid={}", log_level).into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Calculate {
            model,
            mac,
            ssid,
            lenient,
            overflow,
        } => cmd_calculate(&cli, model, mac, *ssid, *lenient, overflow.as_deref()),
        Commands::Offsets { model, mac } => cmd_offsets(&cli, model, mac),
        Commands::Models => cmd_models(&cli),
        Commands::Inventory { file, output } => cmd_inventory(&cli, file, output.as_deref()),
        Commands::AddModel { model, family } => cmd_add_model(model, *family),
        Commands::ShowConfig => cmd_show_config(&cli),
    }
}

fn cmd_calculate(
    cli: &Cli,
    model: &str,
    mac: &str,
    ssid: SsidIndex,
    lenient: bool,
    overflow: Option<&str>,
) -> Result<()> {
    let cfg = Config::load()?;
    let table = cfg.table();
    let mut calculator = cfg.calculator(&table);

    if lenient {
        calculator = calculator.with_band_policy(BandPolicy::Lenient);
    }
    if let Some(policy) = overflow {
        calculator = calculator.with_overflow_policy(policy.parse::<OverflowPolicy>()?);
    }

    let mac: MacAddress = mac.parse()?;
    let bssids = calculator.calculate(model, mac, ssid)?;

    match cli.format {
        OutputFormat::Text => display_bssids(&bssids),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bssids)?),
        OutputFormat::Csv => bail!(CSV_INVENTORY_ONLY),
    }

    Ok(())
}

fn cmd_offsets(cli: &Cli, model: &str, mac: &str) -> Result<()> {
    let cfg = Config::load()?;
    let table = cfg.table();

    let mac: MacAddress = mac.parse()?;
    let family = table.family_of(model)?;
    let prefix = mac.vendor_prefix();

    let bands: Vec<String> = table.bands_for(family, prefix)?.map(|b| b.to_string()).collect();
    let rows: Vec<OffsetEntry<'_>> = table
        .entries()
        .filter(|e| e.family == family && e.prefix == prefix)
        .collect();

    match cli.format {
        OutputFormat::Text => {
            println!("{} {} ({}, vendor prefix {})", model, mac, family, prefix);
            println!("Bands: {}", bands.join(", "));
            println!();
            println!("{:<6} {:>4}  {}", "BAND", "SSID", "OFFSETS");
            println!("{}", "-".repeat(48));
            for entry in &rows {
                println!("{:<6} {:>4}  {}", entry.band, entry.ssid, entry.offsets);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = rows
                .iter()
                .map(|e| serde_json::json!({ "band": e.band, "ssid": e.ssid, "offsets": e.offsets }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "model": model,
                    "family": family,
                    "prefix": prefix,
                    "offsets": rows,
                }))?
            );
        }
        OutputFormat::Csv => bail!(CSV_INVENTORY_ONLY),
    }

    Ok(())
}

fn cmd_models(cli: &Cli) -> Result<()> {
    let cfg = Config::load()?;
    let table = cfg.table();

    match cli.format {
        OutputFormat::Text => {
            println!("{:<12} {}", "MODEL", "FAMILY");
            println!("{}", "-".repeat(20));
            for (model, family) in table.models() {
                println!("{:<12} {}", model, family.0);
            }
        }
        OutputFormat::Json => {
            let models: std::collections::BTreeMap<&str, u8> =
                table.models().map(|(m, f)| (m, f.0)).collect();
            println!("{}", serde_json::to_string_pretty(&models)?);
        }
        OutputFormat::Csv => bail!(CSV_INVENTORY_ONLY),
    }

    Ok(())
}

fn cmd_inventory(cli: &Cli, file: &Path, output: Option<&Path>) -> Result<()> {
    let cfg = Config::load()?;
    let table = cfg.table();
    let calculator: BssidCalculator<'_> = cfg.calculator(&table);

    let inventory = Inventory::load(file)?;
    let records = inventory.bssids(&calculator)?;

    // --output always writes CSV, whatever --format says
    if let Some(path) = output {
        let out = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        inventory::write_csv(&records, calculator.bands(), out)?;
        println!("Wrote {} BSSID records to {}", records.len(), path.display());
        return Ok(());
    }

    match cli.format {
        OutputFormat::Text => display_records(&records, calculator.bands()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Csv => inventory::write_csv(&records, calculator.bands(), io::stdout().lock())?,
    }

    Ok(())
}

fn cmd_add_model(model: &str, family: u8) -> Result<()> {
    let mut cfg = Config::load()?;

    let table = cfg.table();
    if table.prefixes_for(HardwareFamily(family)).next().is_none() {
        tracing::warn!("Family {} has no offsets in the table", family);
    }

    cfg.add_model(model, family);
    cfg.save()?;

    let path = config::config_path()?;
    println!("Saved model '{}' as family {} to {}", model, family, path.display());

    Ok(())
}

fn cmd_show_config(cli: &Cli) -> Result<()> {
    let path = config::config_path()?;
    let cfg = Config::load()?;

    match cli.format {
        OutputFormat::Text => {
            println!("Config file: {}", path.display());
            println!();
            println!("{:<14} {}", "overflow", cfg.overflow);
            println!("{:<14} {}", "band_policy", cfg.band_policy);
            println!("{:<14} {}", "bands", cfg.bands.join(", "));

            if cfg.models.is_empty() {
                println!("{:<14} -", "models");
            } else {
                for (model, family) in &cfg.models {
                    println!("{:<14} {} = {}", "models", model, family);
                }
            }
        }
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(&cfg)
                .context("Failed to serialize config")?;
            println!("{}", content);
        }
        OutputFormat::Csv => bail!(CSV_INVENTORY_ONLY),
    }

    Ok(())
}

fn display_bssids(bssids: &Bssids) {
    if bssids.is_empty() {
        println!("No bands found.");
        return;
    }

    println!("{:<6} {}", "BAND", "BSSID");
    println!("{}", "-".repeat(24));
    for (band, bssid) in bssids {
        println!("{:<6} {}", band, bssid);
    }
}

fn display_records(records: &[BssidRecord], bands: &[RadioBand]) {
    if records.is_empty() {
        println!("No access points with enabled SSIDs found.");
        return;
    }

    print!("{:<24} {:<24} {:<18}", "NETWORK", "SSID", "AP MAC");
    for band in bands {
        print!(" {:<18}", format!("{} BSSID", band));
    }
    println!();
    println!("{}", "-".repeat(68 + 19 * bands.len()));

    for record in records {
        print!(
            "{:<24} {:<24} {:<18}",
            truncate(&record.network, 24),
            truncate(&record.ssid, 24),
            record.ap_mac.to_string()
        );
        for band in bands {
            let bssid = record
                .bssids
                .get(band)
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string());
            print!(" {:<18}", bssid);
        }
        println!();
    }
}

/// Truncates a name to fit a column, appending "..." when cut.
fn truncate(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let cut: String = name.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

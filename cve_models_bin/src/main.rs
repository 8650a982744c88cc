use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use cve_models::{
    config::Config,
    model_base::{ddl, ColumnDef, ColumnType, TableDef},
    registry::{self, ModelRegistry},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,
    #[arg(short, long)]
    regenerate_config: bool,

    /// Write the full DDL for the tracker's tables to stdout.
    #[arg(long)]
    print_schema: bool,
    /// Connect and create schemas, tables, indices and triggers.
    #[arg(long)]
    apply_schema: bool,
}

/// The tracker's table set, declared through the base templates.
fn tracker_tables() -> Vec<TableDef> {
    vec![
        TableDef::main_base(
            "vulnerabilities",
            vec![
                ColumnDef::new("cve_id", ColumnType::VarChar(32)).not_null(),
                ColumnDef::new("description", ColumnType::Text),
                ColumnDef::new("severity", ColumnType::VarChar(16)),
            ],
        ),
        TableDef::nvd_base(
            "nvd_entries",
            vec![
                ColumnDef::new("cve_id", ColumnType::VarChar(32))
                    .primary_key()
                    .indexed(),
                ColumnDef::new("published", ColumnType::TimestampTz).indexed(),
                ColumnDef::new("last_modified", ColumnType::TimestampTz).indexed(),
                ColumnDef::new("data", ColumnType::Jsonb).not_null(),
            ],
        ),
        TableDef::cwe_base(
            "cwe_entries",
            vec![
                ColumnDef::new("cwe_id", ColumnType::VarChar(16)).primary_key(),
                ColumnDef::new("name", ColumnType::Text).not_null(),
                ColumnDef::new("description", ColumnType::Text),
            ],
        ),
    ]
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let result: Result<Config, serde_json::Error> = serde_json::from_reader(&mut reader);
    result.map_err(|err| err.into())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    if args.regenerate_config {
        println!("Generating default config at {:?}.", args.config);
        let default_config = Config::default();

        let mut writer = io::BufWriter::new(fs::File::create(args.config)?);
        serde_json::to_writer_pretty(&mut writer, &default_config)?;
        writer.flush()?;

        println!("Config generated successfully. Edit it before running future operations.");
        return Ok(());
    }

    if args.print_schema {
        for statement in ddl::schema_statements(&tracker_tables()) {
            println!("{}\n", statement);
        }
        return Ok(());
    }

    if args.apply_schema {
        let config = read_config(&args.config)?;
        let model_registry =
            ModelRegistry::init(config.database.pool_settings(), tracker_tables()).await?;
        registry::attach(model_registry)?;

        log::info!("Creating database layout");
        registry::registry()?.apply_schema().await?;
        log::info!("Database layout up to date");
        return Ok(());
    }

    Ok(())
}

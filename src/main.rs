//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seed_dump` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the dump when no seed file is given
//!
//! All core functionality is implemented in the library crate.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use std::process;

use seed_dump::config::Opt;
use seed_dump::initialization::init_logger_with;
use seed_dump::{dump, init_db_pool_with_path, SqliteTable};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&opt).await {
        eprintln!("seed_dump error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(opt: &Opt) -> Result<()> {
    if opt.model.is_some() && opt.tables.len() > 1 {
        bail!("--model can only be used when dumping a single table");
    }
    if opt.append && opt.file.is_none() {
        warn!("--append has no effect without --file");
    }

    let pool = init_db_pool_with_path(&opt.db_path)
        .await
        .context(format!("Failed to open database: {}", opt.db_path.display()))?;

    let mut dumped = 0usize;
    for (index, table_name) in opt.tables.iter().enumerate() {
        let mut table = SqliteTable::open(pool.clone(), table_name)
            .await
            .context(format!("Failed to read table {table_name}"))?;
        if let Some(model) = &opt.model {
            table = table.with_model_name(model);
        }

        // Later tables append, so the file holds one block per dumped table.
        // An empty first table writes nothing, so the next one must not append
        // to whatever an earlier run left behind.
        let mut options = opt.dump_options(index);
        if dumped == 0 && !opt.append {
            options.append = false;
        }

        let output = dump(&table, &options)
            .await
            .context(format!("Failed to dump table {table_name}"))?;

        match output {
            Some(block) => {
                dumped += 1;
                if opt.file.is_none() {
                    print!("{block}");
                }
            }
            None => info!("Table {} is empty, skipped", table_name),
        }
    }

    if let Some(file) = &opt.file {
        info!(
            "Dumped {} of {} table(s) to {}",
            dumped,
            opt.tables.len(),
            file.display()
        );
    }
    Ok(())
}

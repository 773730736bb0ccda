use anyhow::Context;
use clap::Parser;
use documenter_index::cli::{Cli, Commands};
use documenter_index::{Category, IndexRecord, IndexStore, cache, tracing as trace_init};
use std::borrow::Cow;
use std::path::PathBuf;

/// Resolves the store for an optional file argument: a path loads through the
/// sidecar cache, no path means the embedded index.
fn resolve_store(file: Option<PathBuf>) -> anyhow::Result<Cow<'static, IndexStore>> {
    match file {
        Some(path) => cache::load_with_cache(&path).map(Cow::Owned),
        None => Ok(Cow::Borrowed(IndexStore::load())),
    }
}

fn print_record(record: &IndexRecord) {
    println!(
        "{:<8} {:<40} {}",
        record.category,
        record.location,
        record.title
    );
}

fn main() -> anyhow::Result<()> {
    trace_init::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { file } => {
            let store = resolve_store(file)?;
            println!("{} records", store.len());
            for (category, count) in store.category_counts() {
                if count > 0 {
                    println!("  {:<8} {}", category, count);
                }
            }
        }
        Commands::Dump {
            file,
            category,
            limit,
        } => {
            let category = category
                .map(|s| s.parse::<Category>())
                .transpose()
                .context("invalid --category")?;
            let store = resolve_store(file)?;
            let records: Box<dyn Iterator<Item = &IndexRecord> + '_> = match category {
                Some(c) => Box::new(store.in_category(c)),
                None => Box::new(store.iter()),
            };
            for record in records.take(limit) {
                print_record(record);
            }
        }
        Commands::Validate { file } => {
            let store = cache::load_with_cache(&file)?;
            match store.verify() {
                Ok(()) => println!("ok: {} records", store.len()),
                Err(violations) => {
                    for violation in &violations {
                        eprintln!("{}", violation);
                    }
                    anyhow::bail!("{} invariant violation(s)", violations.len());
                }
            }
        }
        Commands::Lookup { location, file } => {
            let store = resolve_store(file)?;
            let mut found = 0usize;
            for record in store.at_location(&location) {
                print_record(record);
                found += 1;
            }
            if found == 0 {
                anyhow::bail!("no records at location {:?}", location);
            }
        }
    }

    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use gifcat::application::dto::ScanOptions;
use gifcat::application::{ProgressCallback, ScanFolderUseCase, group_by_folder, search, set_field};
use gifcat::domain::repositories::CatalogRepository;
use gifcat::infrastructure::persistence::JsonCatalogStore;
use gifcat::presentation::cli::{
    Cli, Commands, ProgressReporter, print_entry, print_failures, print_tree,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let store = JsonCatalogStore::new(&cli.store);

    match cli.command {
        Commands::Scan {
            folder,
            sequential,
            max_depth,
        } => {
            let mut options = if sequential {
                ScanOptions::sequential()
            } else {
                ScanOptions::default()
            };
            options.max_depth = max_depth;

            let mut catalog = store.load().context("Failed to load catalog")?;

            let reporter = ProgressReporter::for_files("Scanning GIF files...");
            let callback = reporter.file_callback();
            let progress: ProgressCallback = &*callback;

            let report = ScanFolderUseCase::new(options)
                .execute(&folder, &mut catalog, Some(progress))
                .context(format!("Failed to scan {}", folder.display()))?;
            reporter.finish("done");

            store.save(&catalog).context("Failed to save catalog")?;

            println!();
            println!("{}", style(report.summary()).green());
            print_failures(&report.failures);
            println!("Catalog: {}", store.location().display());
        }

        Commands::List => {
            if !store.exists() {
                println!(
                    "[!] {} Run `gifcat scan <FOLDER>` first.",
                    style("No catalog yet.").yellow()
                );
                return Ok(());
            }

            let catalog = store.load().context("Failed to load catalog")?;
            print_tree(&group_by_folder(catalog.keys().map(String::as_str)));
            println!("\n{} files", catalog.len());
        }

        Commands::Show { path } => {
            let catalog = store.load().context("Failed to load catalog")?;
            let Some(entry) = catalog.get(&path) else {
                bail!("No catalog entry for {}", path);
            };
            print_entry(&path, entry);
        }

        Commands::Search { query } => {
            let catalog = store.load().context("Failed to load catalog")?;
            let results = search(&catalog, &query);
            print_tree(&group_by_folder(results.iter().map(|(path, _)| *path)));
            println!("\n{} matches", results.len());
        }

        Commands::Set { path, field, value } => {
            let mut catalog = store.load().context("Failed to load catalog")?;
            set_field(&mut catalog, &path, &field, &value)?;
            store.save(&catalog).context("Failed to save catalog")?;
            println!("{}", style("Changes saved.").green());
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

mod cli;
mod company;
mod contact;
mod dataset;
mod error;
mod explorer;
mod fmt;
mod gallery;
mod models;
mod normalize;
mod query;
mod settings;
mod stats;
mod tui;

use clap::{CommandFactory, Parser};

use cli::{BrowseCommands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Projects {
            search,
            year,
            category,
            sort,
            direction,
            page,
            page_size,
            data,
        }) => cli::projects::run(search, year, category, sort, direction, page, page_size, data),
        Some(Commands::Kpis { data }) => cli::kpis::run(data),
        Some(Commands::Featured { data }) => cli::featured::run(data),
        Some(Commands::Gallery { dir, category }) => cli::gallery::run(dir, category),
        Some(Commands::Browse { command }) => match command {
            Some(BrowseCommands::Gallery { dir }) => cli::browse::gallery(dir),
            Some(BrowseCommands::Catalog { data }) => cli::browse::catalog(data),
            None => cli::browse::catalog(None),
        },
        Some(Commands::Info) => cli::info::run(),
        Some(Commands::Services) => cli::info::services(),
        Some(Commands::Contact {
            name,
            email,
            message,
            outbox,
        }) => cli::contact::run(name, email, message, outbox),
        Some(Commands::Export {
            search,
            year,
            category,
            sort,
            direction,
            output,
            data,
        }) => cli::export::run(search, year, category, sort, direction, output, data),
        Some(Commands::Status { data }) => cli::status::run(data),
        Some(Commands::Init {
            gallery_dir,
            outbox_dir,
            data,
        }) => cli::init::run(gallery_dir, outbox_dir, data),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "obra", &mut std::io::stdout());
            Ok(())
        }
        // Bare `obra` opens the catalog explorer.
        None => cli::browse::catalog(None),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

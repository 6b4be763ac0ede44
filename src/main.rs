//! tmbundle - TextMate bundle manager
//!
//! A command line tool for listing, editing, installing and updating the
//! bundles under TextMate's bundles directory. Installing and updating shell
//! out to `git`; editing hands over to `mate`.

use clap::Parser;

mod bundle;
mod cancel;
mod cli;
mod commands;
mod error;
mod logging;
mod operations;
mod paths;
mod process;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Edit(args) => commands::edit::run(args),
        Commands::Update(args) => commands::update::run(args),
        Commands::Install(args) => commands::install::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use packagist::commands::list::ListCommand;
use packagist::commands::search::{SearchCommand, SearchOptions};
use packagist::commands::show::ShowCommand;
use packagist::commands::stats::StatsCommand;
use packagist::config::PackagistConfig;
use packagist::error::{
    PackagistError, Result, format_error_chain, format_error_with_color, get_exit_code,
};
use std::io::IsTerminal;
use packagist::logging;

#[derive(Parser)]
#[command(name = "packagist")]
#[command(author, version, about = "Query the Packagist package registry", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Registry base URL (overrides config and PACKAGIST_API__BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List package names
    #[command(visible_alias = "ls")]
    List {
        /// Only packages from this vendor
        #[arg(long)]
        vendor: Option<String>,

        /// Only packages of this type (e.g., "library", "symfony-bundle")
        #[arg(long = "type", value_name = "TYPE")]
        package_type: Option<String>,
    },

    /// Search packages by keyword, tag or type
    #[command(visible_alias = "s")]
    Search {
        /// Search keyword
        keyword: Option<String>,

        /// Result page
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Only packages with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only packages of this type
        #[arg(long = "type", value_name = "TYPE")]
        package_type: Option<String>,
    },

    /// Show package data for <vendor>/<name>
    Show {
        /// Package identifier (e.g., "monolog/monolog")
        package: String,

        /// Fetch the Composer metadata document instead
        #[arg(long)]
        metadata: bool,
    },

    /// Show registry statistics
    Stats,
}

fn load_config(cli: &Cli) -> Result<PackagistConfig> {
    let mut config = PackagistConfig::load()?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    Ok(config)
}

fn exit_with_error(error: &PackagistError) -> ! {
    if error.is_broken_pipe() {
        std::process::exit(0);
    }

    if std::io::stderr().is_terminal() {
        eprint!("{}", format_error_with_color(error, true));
    } else {
        eprintln!("{}", format_error_chain(error));
    }
    std::process::exit(get_exit_code(error));
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };

    let result: Result<()> = (|| match &cli.command {
        Commands::List {
            vendor,
            package_type,
        } => {
            let command = ListCommand::new(&config)?;
            command.execute(vendor.as_deref(), package_type.as_deref(), cli.compact)
        }
        Commands::Search {
            keyword,
            page,
            tag,
            package_type,
        } => {
            let command = SearchCommand::new(&config)?;
            let options = SearchOptions {
                keyword: keyword.as_deref(),
                page: *page,
                tag: tag.as_deref(),
                package_type: package_type.as_deref(),
            };
            command.execute(&options, cli.compact)
        }
        Commands::Show { package, metadata } => {
            let command = ShowCommand::new(&config)?;
            command.execute(package, *metadata, cli.compact)
        }
        Commands::Stats => {
            let command = StatsCommand::new(&config)?;
            command.execute(cli.compact)
        }
    })();

    if let Err(e) = result {
        exit_with_error(&e);
    }
}

use crate::{adapters::json, config::Config, gateways};
use anyhow::Result;
use cepgeo_core::usecases::build_query_candidates;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process};

#[derive(Debug, Parser)]
#[command(name = "cepgeo", version, about = "Resolve Brazilian postal codes into addresses and coordinates")]
struct Args {
    /// Configuration file (default: cepgeo.toml)
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up the address and coordinate of a postal code
    Resolve {
        /// Postal code, formatted (01001-000) or not (01001000)
        postal_code: String,
    },
    /// Print the geocoding queries of an address
    Candidates {
        city: String,
        state: String,
        #[arg(long)]
        street: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Resolve { postal_code } => {
            let cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
            let resolver = gateways::address_resolver(&cfg);
            let Some(resolved) = resolver.resolve(&postal_code) else {
                eprintln!("Postal code '{postal_code}' not found or invalid");
                process::exit(1);
            };
            if resolved.is_degraded() {
                log::warn!("No coordinate found for '{postal_code}': please enter it manually");
            }
            let resolved = json::ResolvedAddress::from(resolved);
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Command::Candidates {
            city,
            state,
            street,
        } => {
            for query in build_query_candidates(&city, &state, street.as_deref()) {
                println!("{query}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_resolve() {
        let args = Args::try_parse_from(["cepgeo", "-c", "my.toml", "resolve", "01001-000"]).unwrap();
        assert_eq!(Some(PathBuf::from("my.toml")), args.config);
        assert!(matches!(
            args.command,
            Command::Resolve { ref postal_code } if postal_code == "01001-000"
        ));
    }

    #[test]
    fn parse_candidates() {
        let args = Args::try_parse_from([
            "cepgeo",
            "candidates",
            "São Paulo",
            "SP",
            "--street",
            "Praça da Sé",
        ])
        .unwrap();
        match args.command {
            Command::Candidates {
                city,
                state,
                street,
            } => {
                assert_eq!("São Paulo", city);
                assert_eq!("SP", state);
                assert_eq!(Some("Praça da Sé".to_string()), street);
            }
            _ => panic!("Expected candidates command"),
        }
    }
}

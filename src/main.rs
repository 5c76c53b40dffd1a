//! memcert CLI application.
//!
//! Prints the certificate provisioning script for the scheme's members.
//! With no arguments it renders the built-in roster with default settings.

use clap::{Parser, ValueEnum};
use memcert::error::Result;
use memcert::logging::init_logging;
use memcert::roster::loader::{load_roster_file, RosterFile};
use memcert::roster::validate::validate_roster;
use memcert::script::generator::{generate_script, Section};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memcert")]
#[command(about = "Generate OpenSSL provisioning scripts for trust scheme members", long_about = None)]
struct Cli {
    /// JSON roster file (members and/or settings)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Sequence number of the first member
    #[arg(long)]
    start: Option<u32>,

    /// Validity of issued certificates in days
    #[arg(long)]
    days: Option<u32>,

    /// Signing issuer certificate file
    #[arg(long)]
    ca_cert: Option<String>,

    /// Signing issuer key file
    #[arg(long)]
    ca_key: Option<String>,

    /// Extension config passed to `openssl x509 -extfile`
    #[arg(long)]
    extfile: Option<String>,

    /// Part of the script to print
    #[arg(long, value_enum, default_value = "all")]
    section: SectionArg,

    /// Check the roster before rendering
    #[arg(long)]
    check: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SectionArg {
    All,
    Commands,
    Roles,
    Signers,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::All => Section::All,
            SectionArg::Commands => Section::Commands,
            SectionArg::Roles => Section::Roles,
            SectionArg::Signers => Section::Signers,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let roster = match &cli.roster {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading roster file");
            load_roster_file(path)?
        }
        None => RosterFile::default(),
    };
    let (mut config, members) = roster.into_parts();

    if let Some(start) = cli.start {
        config.start = start;
    }
    if let Some(days) = cli.days {
        config.validity_days = days;
    }
    if let Some(ca_cert) = cli.ca_cert {
        config.signing_ca_cert = ca_cert;
    }
    if let Some(ca_key) = cli.ca_key {
        config.signing_ca_key = ca_key;
    }
    if let Some(extfile) = cli.extfile {
        config.extfile = extfile;
    }

    if cli.check {
        validate_roster(&members)?;
        tracing::info!(members = members.len(), "roster checks passed");
    }

    let script = generate_script(&members, &config)?;
    script.write_to(&mut std::io::stdout().lock(), cli.section.into())?;

    Ok(())
}

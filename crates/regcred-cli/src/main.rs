//! regcred CLI — `regcred` command.
//!
//! Resolves and edits registry credentials held in a `config.json` style
//! file. Edits apply to the in-memory store of a single invocation only;
//! the file itself is never rewritten.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use regcred::{validate_credential_format, Credential, CredentialError, FileStore};

// ── Config path resolution ────────────────────────────────────────────────────

const CONFIG_FILE_NAME: &str = "config.json";

/// `--config`, then `$DOCKER_CONFIG/config.json`, then `~/.docker/config.json`.
fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(dir) = std::env::var_os("DOCKER_CONFIG") {
        return Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME));
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| anyhow!("HOME not set; pass --config to locate the credential file"))?;
    Ok(PathBuf::from(home).join(".docker").join(CONFIG_FILE_NAME))
}

// ── Password helper ───────────────────────────────────────────────────────────

fn read_password(prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    let mut password = String::new();
    std::io::stdin()
        .read_line(&mut password)
        .context("failed to read password")?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// regcred CLI — resolve plaintext registry credentials.
#[derive(Parser, Debug)]
#[command(
    name = "regcred",
    about = "Plaintext registry credential store",
    version,
    long_about = "regcred — plaintext registry credential store\n\nLook up credentials for registry server addresses in a config.json file.\nChanges made with put/delete are not written back to the file."
)]
struct Cli {
    /// Credential file (default: $DOCKER_CONFIG/config.json or ~/.docker/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Open the store with plaintext puts disabled
    #[arg(long, global = true)]
    read_only: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the credential for a server address
    Get {
        /// Server address (e.g. registry.example.com)
        address: String,

        /// Print the password as well
        #[arg(long)]
        show_password: bool,
    },

    /// List configured server addresses
    List,

    /// Store a credential for this session (not written back to the file)
    Put {
        /// Server address
        address: String,

        /// Username (must not contain ':')
        #[arg(long)]
        username: String,
    },

    /// Remove a credential for this session (not written back to the file)
    Delete {
        /// Server address
        address: String,
    },

    /// Check whether a put would be accepted, without asking for a password
    Check {
        /// Server address
        address: String,

        /// Username to validate
        #[arg(long)]
        username: String,
    },
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = resolve_config_path(cli.config.clone()).and_then(|path| {
        log::debug!("using credential file {}", path.display());
        let store = open_store(&path, cli.read_only)?;

        match cli.command {
            Commands::Get {
                address,
                show_password,
            } => cmd_get(&store, &address, show_password),
            Commands::List => cmd_list(&store, cli.verbose),
            Commands::Put { address, username } => cmd_put(&store, &address, &username),
            Commands::Delete { address } => cmd_delete(&store, &address),
            Commands::Check { address, username } => cmd_check(&store, &address, &username),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn open_store(path: &std::path::Path, read_only: bool) -> Result<FileStore> {
    let store = if read_only {
        FileStore::open_read_only(path)
    } else {
        FileStore::open(path)
    };
    store.context("failed to open credential store")
}

// ── Command implementations ───────────────────────────────────────────────────

/// `regcred get ADDRESS [--show-password]`
fn cmd_get(store: &FileStore, address: &str, show_password: bool) -> Result<()> {
    let Some(cred) = store.get(address) else {
        println!("no credential for {address}");
        return Ok(());
    };

    println!("Server:   {address}");
    println!("Username: {}", cred.username());
    if show_password {
        println!("Password: {}", cred.password());
    }
    Ok(())
}

/// `regcred list`
fn cmd_list(store: &FileStore, verbose: bool) -> Result<()> {
    let addresses = store.addresses();
    if addresses.is_empty() {
        println!("No credentials configured.");
        return Ok(());
    }

    for address in &addresses {
        match store.get(address) {
            Some(cred) if verbose => println!("{address}  ({})", cred.username()),
            Some(_) => println!("{address}"),
            // Removed between the snapshot and the lookup.
            None => continue,
        }
    }

    if verbose {
        println!("{} credential(s)", addresses.len());
    }
    Ok(())
}

/// `regcred put ADDRESS --username USER`
fn cmd_put(store: &FileStore, address: &str, username: &str) -> Result<()> {
    // Fail before prompting for a secret that would be thrown away.
    if store.is_put_disabled() {
        return Err(CredentialError::PutDisabled.into());
    }
    validate_credential_format(&Credential::new(username, ""))?;

    let password = read_password(&format!("Password for {username}@{address}: "))?;
    if password.is_empty() {
        return Err(anyhow!("password cannot be empty"));
    }

    store.put(address, Credential::new(username, password))?;
    println!("Stored credential for {address} (session only, not written to file)");
    Ok(())
}

/// `regcred delete ADDRESS`
fn cmd_delete(store: &FileStore, address: &str) -> Result<()> {
    let existed = store.get(address).is_some();
    store.delete(address)?;

    if existed {
        println!("Deleted credential for {address} (session only, not written to file)");
    } else {
        println!("no credential for {address}");
    }
    Ok(())
}

/// `regcred check ADDRESS --username USER`
fn cmd_check(store: &FileStore, address: &str, username: &str) -> Result<()> {
    if store.is_put_disabled() {
        return Err(CredentialError::PutDisabled)
            .with_context(|| format!("cannot store a credential for {address}"));
    }
    validate_credential_format(&Credential::new(username, ""))
        .with_context(|| format!("cannot store a credential for {address}"))?;

    println!("ok: a credential for {username}@{address} would be accepted");
    Ok(())
}

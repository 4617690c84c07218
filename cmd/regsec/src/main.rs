//! regsec: Kubernetes image-pull Secret generator.
//!
//! Builds `kubernetes.io/dockerconfigjson` Secret manifests from registry
//! credentials, renders them encoded or as a decoded preview, and keeps a
//! history of previously used inputs for reuse.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pkg_history::History;
use pkg_names::generate_pull_secret_name;
use pkg_types::secret::Secret;
use pkg_types::validate::validate_name;
use std::env;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

mod output;

#[derive(Parser)]
#[command(name = "regsec", about = "Kubernetes image-pull Secret generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an image-pull Secret manifest
    Generate(GenerateArgs),
    /// Decode the Docker config payload of an existing manifest
    Decode(DecodeArgs),
    /// Inspect or clear the input history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

// ── Generate ────────────────────────────────────────────────────────────

#[derive(clap::Args)]
struct GenerateArgs {
    /// Registry host, e.g. registry.gitlab.com
    #[arg(short, long)]
    registry: String,
    /// Registry username
    #[arg(short, long)]
    username: String,
    /// Registry password or access token
    #[arg(short, long)]
    password: String,
    /// Secret name (a random pullsecret-* name is used if omitted)
    #[arg(long)]
    name: Option<String>,
    /// Namespace for the Secret metadata
    #[arg(short, long)]
    namespace: Option<String>,
    /// Write the manifest to this file instead of stdout
    #[arg(short, long, conflicts_with = "decoded")]
    output: Option<PathBuf>,
    /// Render the Docker config as plaintext JSON instead of base64
    #[arg(long, default_value_t = false)]
    decoded: bool,
}

// ── Decode ──────────────────────────────────────────────────────────────

#[derive(clap::Args)]
struct DecodeArgs {
    /// Manifest file to decode (stdin if omitted)
    file: Option<PathBuf>,
}

// ── History ─────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum HistoryAction {
    /// Show recorded registries, namespaces, and secret names
    Show,
    /// Delete the recorded history
    Clear,
}

/// How a Secret manifest is presented.
#[derive(Debug, Clone, Copy)]
enum RenderMode {
    /// As applied to a cluster, data values base64-encoded.
    Encoded,
    /// Human-readable, with the Docker config decoded to plaintext.
    Decoded,
}

fn main() -> Result<()> {
    if env::var("RUST_LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().json().flatten_event(true).init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => cmd_generate(args),
        Command::Decode(args) => cmd_decode(args),
        Command::History { action } => cmd_history(action),
    }
}

// ── Generate command ────────────────────────────────────────────────────

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let registry = args.registry.trim();
    let username = args.username.trim();
    let password = args.password.trim();

    if registry.is_empty() {
        bail!("registry must not be empty");
    }
    if username.is_empty() {
        bail!("username must not be empty");
    }
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let namespace = args
        .namespace
        .as_deref()
        .map(str::trim)
        .filter(|ns| !ns.is_empty());
    if let Some(ns) = namespace {
        validate_name(ns).context("invalid namespace")?;
    }

    let explicit_name = args.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
    if let Some(name) = explicit_name {
        validate_name(name).context("invalid secret name")?;
    }
    let name = match explicit_name {
        Some(name) => name.to_string(),
        None => {
            let generated = generate_pull_secret_name();
            info!("Generated secret name: {}", generated);
            generated
        }
    };

    let secret = Secret::image_pull(registry, username, password, &name, namespace)?;

    let mode = if args.decoded {
        RenderMode::Decoded
    } else {
        RenderMode::Encoded
    };
    let manifest = match mode {
        RenderMode::Encoded => secret.to_yaml()?,
        RenderMode::Decoded => secret.decoded_preview()?,
    };

    record_history(registry, namespace, explicit_name);

    match args.output {
        Some(path) => {
            let path = output::ensure_yaml_ext(&path);
            output::write_manifest(&path, &manifest)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", manifest),
    }

    Ok(())
}

/// Record submitted inputs so they can be suggested again later.
/// Only a name the user typed is recorded, never a generated one.
/// Failures are logged and never abort the command.
fn record_history(registry: &str, namespace: Option<&str>, name: Option<&str>) {
    let Some(path) = pkg_history::default_history_path() else {
        return;
    };

    let mut history = pkg_history::load_history(&path).unwrap_or_else(|e| {
        warn!("Could not load history: {:#}", e);
        History::default()
    });

    history.add_registry(registry);
    if let Some(ns) = namespace {
        history.add_namespace(ns);
    }
    if let Some(name) = name {
        history.add_name(name);
    }

    if let Err(e) = pkg_history::save_history(&path, &history) {
        warn!("Could not save history: {:#}", e);
    }
}

// ── Decode command ──────────────────────────────────────────────────────

fn cmd_decode(args: DecodeArgs) -> Result<()> {
    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let secret: Secret =
        serde_yaml::from_str(&content).context("input is not a Secret manifest")?;
    print!("{}", secret.decoded_preview()?);

    Ok(())
}

// ── History command ─────────────────────────────────────────────────────

fn cmd_history(action: HistoryAction) -> Result<()> {
    let Some(path) = pkg_history::default_history_path() else {
        bail!("no user config directory available on this platform");
    };

    match action {
        HistoryAction::Show => {
            let history = pkg_history::load_history(&path)?;
            if history.is_empty() {
                println!("(history is empty)");
                return Ok(());
            }
            print_entries("Registries", &history.sorted_registries());
            print_entries("Namespaces", &history.sorted_namespaces());
            print_entries("Names", &history.sorted_names());
        }
        HistoryAction::Clear => {
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("failed to remove {}", path.display()))?;
            }
            println!("History cleared");
        }
    }

    Ok(())
}

fn print_entries(title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    println!("{}:", title);
    for entry in entries {
        println!("  {}", entry);
    }
}

use clap::{Parser, Subcommand};
use ghtag::{
    commands::update::{self, UpdateCommand},
    logger, GlobalOpts,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ghtag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "GitHub dependency tagger for package.json",
    long_about = "ghtag rewrites github: dependency URIs in a package.json, appending the #v<version> tag found in sibling projects' own manifests."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag github: dependencies with versions from sibling projects
    Update(UpdateCommand),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing(cli.global.verbosity_level());

    run(cli);
}

/// Surface the library's candidate-scan diagnostics on stderr. Skipped
/// sibling manifests are warned about at any verbosity; -v adds debug
/// detail and -vv traces every directory checked.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("ghtag_manifest={level}"))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) {
    match cli.command {
        Commands::Update(cmd) => {
            if let Err(e) = update::handle_update(cmd, cli.global) {
                logger::error(&format!("{:#}", e));
                std::process::exit(1);
            }
        }
    }
}

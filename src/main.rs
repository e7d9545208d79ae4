//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::content::ContentType;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Markdown content backend for a portfolio and blog site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new draft blog post or project
    New {
        /// Content type (blog, projects)
        r#type: ContentType,

        /// Title of the new entry
        title: String,

        /// Slug to use instead of the slugified title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List published content, newest first
    #[command(alias = "ls")]
    List {
        /// Content type (blog, projects)
        #[arg(default_value = "blog")]
        r#type: ContentType,
    },

    /// Show one entry as JSON, whatever its status
    Show {
        /// Content type (blog, projects)
        r#type: ContentType,

        /// Slug of the entry
        slug: String,
    },

    /// Report files the reader cannot load
    Check {
        /// Content type to check (defaults to all)
        r#type: Option<ContentType>,
    },

    /// Export published content as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print SEO meta tags for an entry
    Seo {
        /// Content type (blog, projects)
        r#type: ContentType,

        /// Slug of the entry
        slug: String,
    },

    /// Start the content API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            r#type,
            title,
            slug,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            let path = folio::commands::new::create_entry(&site, r#type, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::list::run(&site, r#type)?;
        }

        Commands::Show { r#type, slug } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, r#type, &slug)?;
        }

        Commands::Check { r#type } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::check::run(&site, r#type)?;
        }

        Commands::Export { output } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::export::run(&site, output.as_deref())?;
        }

        Commands::Seo { r#type, slug } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::seo::run(&site, r#type, &slug)?;
        }

        Commands::Server { port, ip } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Serving content from {:?}", site.content_dir);
            folio::server::start(&site, &ip, port).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

mod serve;
mod snapshot;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use tomo_core::detail::{DetailOptions, DetailView};
use tomo_core::gallery::{self, GalleryQuery};
use tomo_core::{
    Character, Config, RecordError, RecordStore, RenderOutcome, TypeMask, ViewController,
    VisualState,
};

#[derive(Parser)]
#[command(name = "tomo")]
#[command(about = "Browse Mii records and their relationship web", long_about = None)]
struct Cli {
    /// Directory or http(s) URL holding `_summary.json`
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the local viewer
    Serve {
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser
        #[arg(long)]
        no_open: bool,
    },
    /// List Miis
    List {
        /// Nickname search term
        #[arg(long)]
        search: Option<String>,
        /// Personality such as "easygoing dreamer"
        #[arg(long)]
        personality: Option<String>,
    },
    /// Show one Mii by nickname or index
    Show {
        key: String,
    },
    /// Write the relationship web as an SVG file
    Render {
        /// Enabled relationship type codes, e.g. 4,2,12
        #[arg(long, value_delimiter = ',')]
        types: Option<Vec<u32>>,
        /// Highlight one Mii
        #[arg(long)]
        focus: Option<String>,
        /// Output file
        #[arg(long, default_value = "relationship-web.svg")]
        out: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = dir;
    }

    match cli.command {
        Commands::Serve { port, no_open } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if no_open {
                config.server.open_browser = false;
            }
            serve::start_server(config.into()).await?;
        }
        Commands::List {
            search,
            personality,
        } => {
            let store = RecordStore::from_config(&config.data);
            let progress = spinner("Loading Miis...");
            let summaries = store.summaries().await;
            progress.finish_and_clear();
            let summaries = summaries?;
            let query = GalleryQuery::new(
                search.unwrap_or_default(),
                personality.unwrap_or_else(|| "all".to_string()),
            );
            let view = gallery::filter(&summaries, &query, &config.data.face_image, "");

            if let Some(message) = &view.empty_message {
                println!("{}", message);
                return Ok(());
            }
            for item in &view.items {
                println!("{:>4}  {:<16} {}", item.index, item.nickname, item.personality_type);
            }
            println!("\n{}", view.count_label);
        }
        Commands::Show { key } => {
            let store = RecordStore::from_config(&config.data);
            let progress = spinner("Loading Mii...");
            let loaded = async {
                let summary = store.find(&key).await?;
                let detail = store.detail(&summary).await?;
                Ok::<_, RecordError>(Character { summary, detail })
            }
            .await;
            progress.finish_and_clear();
            let character = loaded?;
            let options = DetailOptions {
                face_image: &config.data.face_image,
                body_image: &config.data.body_image,
                asset_prefix: &config.data.data_dir,
                top: config.detail.top_relationships,
            };
            print_detail(&DetailView::new(&character, options));
        }
        Commands::Render { types, focus, out } => {
            let store = RecordStore::from_config(&config.data);
            let mut controller = ViewController::new(config.chord.clone());

            let progress = spinner("Loading relationship data...");
            let mut outcome = controller.activate(&store).await;
            progress.finish_and_clear();
            if let Some(types) = types {
                outcome = controller.on_filter_changed(TypeMask::only(types));
            }

            let render = match outcome {
                RenderOutcome::Rendered(render) => render,
                RenderOutcome::NoData { message } => {
                    println!("{}", message);
                    return Ok(());
                }
                RenderOutcome::Failed { message } => return Err(message.into()),
            };

            let visual = match &focus {
                Some(name) => controller
                    .focus(name)
                    .cloned()
                    .ok_or_else(|| format!("{} is not part of the relationship web", name))?,
                None => VisualState::baseline(&render),
            };

            std::fs::write(&out, snapshot::to_svg(&render, &visual))?;
            println!(
                "Wrote {} ({} Miis, {} relationships)",
                out.display(),
                render.nodes.len(),
                render.ribbons.len()
            );
        }
        Commands::Config => {
            print!("{}", config.to_toml());
        }
    }

    Ok(())
}

/// Terminal spinner shown while records load.
fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_detail(view: &DetailView) {
    println!("{}", view.nickname);
    println!("  {}", view.full_name);
    println!("  Creator: {}", view.creator);

    let p = &view.personality;
    if p.main.is_some() || !p.subtype_name.is_empty() {
        println!("\nPersonality: {} {}", p.main_name, p.subtype_name);
        if let Some(main) = p.main {
            println!("  Overall: {}", main.overall);
            println!("  Character: {}", main.character);
        }
        if let Some(subtype) = p.subtype {
            println!("  {}", subtype.description);
        }
    }

    println!("\nRelationships:");
    if view.relationships.shown.is_empty() {
        println!("  No relationships found.");
    }
    for line in &view.relationships.shown {
        println!("  {:<16} {}", line.target_name, line.type_name);
    }
    if view.relationships.hidden > 0 {
        println!("  ... and {} more", view.relationships.hidden);
    }

    println!("\nImages: {}, {}", view.face_image, view.body_image);
}

mod clipboard;
mod fetch;
mod format;
mod refpage;
mod settings;
mod text;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "gl_refdoc",
    about = "Turn an OpenGL reference page into a Doxygen comment block and copy it"
)]
struct Cli {
    /// GL function to document (default: REFDOC_FUNCTION or glGetProgramInfoLog)
    #[arg(conflicts_with = "file")]
    function: Option<String>,

    /// Parse a saved page instead of fetching it
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Reference pages root URL
    #[arg(long, conflicts_with = "file")]
    base_url: Option<String>,

    /// Comment prefix for every line
    #[arg(short, long)]
    prefix: Option<String>,

    /// Print only, leave the clipboard alone
    #[arg(long)]
    no_copy: bool,

    /// Print extracted fields as JSON instead of a comment block
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load()?;

    let html = match &cli.file {
        Some(path) => fetch::read_page(path)?,
        None => {
            let function = cli.function.as_deref().unwrap_or(&settings.function);
            let base_url = cli.base_url.as_deref().unwrap_or(&settings.base_url);
            let url = fetch::page_url(base_url, function, &settings.page_ext);
            let client = fetch::client(&settings.user_agent)?;
            fetch::fetch_page(&client, &url).await?
        }
    };

    let page = refpage::extract(&html).context("Failed to extract reference page fields")?;
    info!(
        "{}: {} params, {} description paragraphs",
        page.name,
        page.params.len(),
        page.description.len()
    );

    let block = if cli.json {
        let mut json = serde_json::to_string_pretty(&page)?;
        json.push('\n');
        json
    } else {
        let prefix = cli.prefix.as_deref().unwrap_or(&settings.comment_prefix);
        format::render(&page, prefix)
    };

    clipboard::publish(&block, !cli.no_copy, settings.clipboard_hold())?;
    Ok(())
}

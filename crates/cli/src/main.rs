use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use recast_core::{
    AccessContext, Audience, Channel, Document, ExtractConfig, FetchConfig, Recaster, RewriteRequest, Rewriter,
    RewriterConfig, build_prompt, extract_content, fetch_url,
};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the rewrite result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Rewrite web page content for a chosen audience and context
#[derive(Parser, Debug)]
#[command(name = "recast")]
#[command(author = "Recast Contributors")]
#[command(version = VERSION)]
#[command(about = "Rewrite web page content for a chosen audience", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Target audience (imaging-technicians, procurement, journalist)
    #[arg(short, long, default_value = "journalist", value_name = "AUDIENCE")]
    audience: Audience,

    /// Consumption context (mobile, desktop, podcast)
    #[arg(short, long, default_value = "desktop", value_name = "CONTEXT")]
    context: AccessContext,

    /// Delivery channel (email, newsletter, social-media)
    #[arg(long, value_name = "CHANNEL")]
    channel: Option<Channel>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Print the extracted text and prompt without calling the model
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let html = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            echo::print_step(
                1,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }

        let config = FetchConfig {
            timeout: args.timeout,
            user_agent: args
                .user_agent
                .unwrap_or_else(|| FetchConfig::default().user_agent),
        };

        fetch_url(&args.input, &config).await.context("Failed to fetch URL")?
    } else {
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        fs::read_to_string(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        echo::print_step(2, 4, "Parsing HTML document");
    }

    let doc = Document::parse(&html).context("Failed to parse HTML")?;

    if args.verbose {
        if let Some(title) = doc.title() {
            eprintln!("  {} {}", "Title:".dimmed(), title.bright_white());
        }
        eprintln!();
    }

    if args.verbose {
        echo::print_step(3, 4, "Extracting main content");
    }

    let page = extract_content(&doc, &ExtractConfig::default()).context("Failed to extract content")?;

    if args.verbose {
        eprintln!("  {} {}", "Matched:".dimmed(), page.matched.bright_white());
        eprintln!(
            "  {} {}",
            "Characters:".dimmed(),
            page.text.chars().count().to_string().bright_white()
        );
        eprintln!();
    }

    if args.dry_run {
        let request = RewriteRequest {
            original: page.text,
            audience: args.audience,
            context: args.context,
            channel: args.channel,
        };
        if args.verbose {
            echo::print_info("Dry run: skipping model call");
        }
        println!("{}", build_prompt(&request));
        return Ok(());
    }

    if args.verbose {
        echo::print_step(4, 4, "Rewriting content");
    }

    let rewriter_config = RewriterConfig::from_env().context("Model API configuration is incomplete")?;
    let recaster = Recaster::new(Rewriter::new(rewriter_config)?);

    let source_url = if args.input.starts_with("http") { Some(args.input.as_str()) } else { None };

    let rewrite = match recaster
        .rewrite_html(&html, source_url, args.audience, args.context, args.channel)
        .await
    {
        Ok(rewrite) => rewrite,
        Err(e) => {
            echo::print_error(&e.to_string());
            return Err(e.into());
        }
    };

    let output = match args.format {
        OutputFormat::Text => rewrite.rewritten.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&rewrite).context("Failed to serialize result")?,
    };

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Words:".dimmed(),
            rewrite.word_count.to_string().bright_white()
        );
        eprintln!();
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

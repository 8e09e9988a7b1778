use clap::{Parser, Subcommand};
use std::path::PathBuf;
use topicgen::{content, generate, output};

#[derive(Parser)]
#[command(name = "topicgen")]
#[command(version)]
#[command(about = "Static site generator for Q&A topic pages")]
#[command(long_about = "\
Static site generator for Q&A topic pages

One declarative content file describes the whole site: shared chrome, the
cross-topic carousel, and every topic page with its question/answer accordion
and explore-more cards. Each topic becomes a standalone HTML document at
<output>/<slug>.html.

Content is validated before anything is written: a missing field, a duplicate
slug, or a typo'd key aborts the build with nothing on disk.

Run 'topicgen gen-content' to print a documented starter topics.toml.")]
struct Cli {
    /// Content file
    #[arg(long, default_value = "content/topics.toml", global = true)]
    content: PathBuf,

    /// Output directory
    #[arg(long, default_value = "pages", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load content, render every topic page, and write the output directory
    Build,
    /// Validate the content file without writing anything
    Check,
    /// Print a documented starter topics.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let registry = content::load_registry(&cli.content)?;
            let report = generate::generate(&registry, &cli.output)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.content.display());
            let registry = content::load_registry(&cli.content)?;
            output::print_check_output(&registry);
            println!("==> Content is valid");
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}

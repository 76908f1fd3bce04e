use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use portfolio_site::core::catalog;
use portfolio_site::core::markup::render_content;
use portfolio_site::utils::logger;
use portfolio_site::{CategoryFilter, Labels};

#[derive(Parser)]
#[command(name = "articles")]
#[command(about = "Query the built-in article catalog")]
struct Args {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List article summaries, optionally for one category
    List {
        /// all, rails, react, fullstack or devops
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one article by id
    Show {
        id: String,

        /// Print the rendered HTML body instead of the raw content
        #[arg(long)]
        html: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let catalog = catalog::builtin();
    let labels = Labels::default();

    match args.command {
        Command::List { category, json } => {
            let articles = catalog.list_by_selector(&category);
            if json {
                let summaries: Vec<_> = articles
                    .iter()
                    .map(|article| article.summary(catalog::SUMMARY_TAG_LIMIT))
                    .collect();
                let output = serde_json::to_string_pretty(&summaries)
                    .context("serializing article summaries")?;
                println!("{}", output);
                return Ok(());
            }

            if articles.is_empty() {
                println!("{}", labels.no_articles);
                return Ok(());
            }

            for article in articles {
                println!(
                    "{:>3}  {:<14} {:>2} {}  {}  {}",
                    article.id,
                    labels.filter(CategoryFilter::Only(article.category)),
                    article.read_time,
                    labels.min_read,
                    article.formatted_date(),
                    article.title
                );
            }
        }
        Command::Show { id, html } => {
            let Some(article) = catalog.find_by_id(&id) else {
                eprintln!("{}", labels.not_found);
                bail!("no article with id '{}'", id);
            };

            println!("{}", article.title);
            println!(
                "{} | {} | {} {}",
                article.author,
                article.formatted_date(),
                article.read_time,
                labels.min_read
            );
            println!("Tags: {}", article.tags.join(", "));
            println!();
            println!("{}", article.excerpt);
            println!();
            if html {
                println!("{}", render_content(&article.content));
            } else {
                println!("{}", article.content.trim());
            }
        }
    }

    Ok(())
}

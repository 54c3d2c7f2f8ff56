//! hakbot CLI application
//!
//! Command-line interface for the hakbot library: one-off questions, an
//! interactive chat loop, wage calculations, and knowledge-base maintenance
//! (seeding and embedding backfill).

use clap::{Parser, Subcommand};
use hakbot::{Chatbot, Config, EmbeddingProvider, KnowledgeStore, Language, SeedItem};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hakbot")]
#[command(about = "Multilingual chatbot for migrant-worker rights in Malaysia")]
#[command(version)]
struct Cli {
    /// Knowledge-base SQLite file
    #[arg(short, long, default_value = "knowledge.db", global = true)]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// The question to ask (1..1000 characters)
        question: String,

        /// Language code: en, ms, ne, hi, bn
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Optional session id for the conversation log
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Interactive chat session
    Chat {
        /// Language code: en, ms, ne, hi, bn
        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Raw retrieval debugging: show what the engine would ground on
    Search {
        /// Search query
        query: String,

        /// Language code: en, ms, ne, hi, bn
        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// Calculate statutory wage rates and overtime pay
    Wage {
        /// Monthly salary in RM
        monthly: f64,

        /// Overtime hours worked
        #[arg(long, default_value = "0")]
        ot_hours: f64,
    },

    /// Load knowledge items from a JSON file (array of items)
    Seed {
        /// JSON file with knowledge items
        input: PathBuf,
    },

    /// Compute embeddings for rows that do not have one yet
    Backfill,

    /// Show knowledge-base statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = Arc::new(KnowledgeStore::new(&cli.database)?);
    let config = Config::from_env();

    match cli.command {
        Commands::Ask {
            question,
            language,
            session,
        } => {
            let bot = Chatbot::from_config(&config, store);
            let turn = bot
                .answer(&question, Language::from_code(&language), session)
                .await?;
            println!("{}", turn.answer);
            if !turn.citations.is_empty() {
                println!("\nSources: {}", turn.citations.join(", "));
            }
            println!("[{:?}, {}ms]", turn.source_type, turn.response_time_ms);
        }

        Commands::Chat { language } => {
            let bot = Chatbot::from_config(&config, store.clone());
            let language = Language::from_code(&language);
            run_chat_loop(&bot, &store, language).await?;
        }

        Commands::Search { query, language } => {
            let embedder = Arc::new(EmbeddingProvider::new(config.embedding.clone()));
            let engine = hakbot::RetrievalEngine::new(store, embedder, config.retrieval.clone());
            let retrieval = engine.retrieve(&query, Language::from_code(&language)).await?;
            println!(
                "{} results via {:?}:",
                retrieval.results.len(),
                retrieval.method
            );
            for (i, r) in retrieval.results.iter().enumerate() {
                let preview: String = r.item.primary_text.chars().take(100).collect();
                println!("{}. [{:.3}] {} — {}", i + 1, r.score, r.item.citation_id(), preview);
            }
        }

        Commands::Wage { monthly, ot_hours } => {
            let breakdown = hakbot::calculate_wage(monthly, ot_hours)?;
            for step in &breakdown.steps {
                println!("{}", step);
            }
            println!("\nCitation: {}", breakdown.citation);
        }

        Commands::Seed { input } => {
            let data = std::fs::read_to_string(&input)?;
            let items: Vec<SeedItem> = serde_json::from_str(&data)?;
            let inserted = store.insert_items(&items)?;
            println!("Inserted {} knowledge items from {}", inserted, input.display());
        }

        Commands::Backfill => {
            let embedder = EmbeddingProvider::new(config.embedding.clone());
            let pending = store.items_missing_embedding()?;
            if pending.is_empty() {
                println!("All rows already have embeddings");
                return Ok(());
            }
            println!("Backfilling embeddings for {} rows", pending.len());

            let texts: Vec<String> = pending.iter().map(|i| i.searchable_text()).collect();
            let embeddings = embedder.embed_batch(&texts).await?;
            let mut written = 0usize;
            for (item, embedding) in pending.iter().zip(embeddings.iter()) {
                if store.store_embedding(item.id, embedding)? {
                    written += 1;
                }
            }
            println!("Wrote {} embeddings", written);
        }

        Commands::Stats => {
            let stats = store.stats()?;
            println!("Knowledge-base statistics:");
            println!("  Total items: {}", stats.total_items);
            println!("  With embeddings: {}", stats.embedded_items);
            for (table, count) in &stats.items_per_table {
                println!("    {}: {}", table, count);
            }
            println!("  Logged chat turns: {}", stats.logged_turns);
        }
    }

    Ok(())
}

async fn run_chat_loop(
    bot: &Chatbot,
    store: &Arc<KnowledgeStore>,
    language: Language,
) -> anyhow::Result<()> {
    println!("hakbot interactive chat ({})", language.name());
    println!("   Type 'quit' or 'exit' to end the session");
    println!("   Type 'help' for more commands");

    if let Ok(stats) = store.stats() {
        println!(
            "\nKnowledge base: {} items ({} embedded)",
            stats.total_items, stats.embedded_items
        );
    }
    println!("{}", "-".repeat(50));

    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "help" => {
                println!("\nCommands:");
                println!("  stats     - Show knowledge-base statistics");
                println!("  help      - Show this help");
                println!("  exit/quit - End session");
                continue;
            }
            "stats" => {
                match store.stats() {
                    Ok(stats) => {
                        println!("\nKnowledge-base statistics:");
                        println!("  Total items: {}", stats.total_items);
                        println!("  With embeddings: {}", stats.embedded_items);
                        println!("  Logged chat turns: {}", stats.logged_turns);
                    }
                    Err(e) => println!("Error getting stats: {}", e),
                }
                continue;
            }
            _ => match bot.answer(input, language, None).await {
                Ok(turn) => {
                    println!("\nBot: {}", turn.answer);
                    if !turn.citations.is_empty() {
                        println!("Sources: {}", turn.citations.join(", "));
                    }
                    println!("[{:?}, {}ms]", turn.source_type, turn.response_time_ms);
                }
                Err(e) => println!("Error: {}", e),
            },
        }
    }

    Ok(())
}

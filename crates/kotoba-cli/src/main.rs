use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kotoba_anki::{AnkiConnectClient, CardTemplate, records_to_tsv};
use kotoba_config::Config;
use kotoba_core::{DictionaryType, VocabularyEntry};
use kotoba_fetch::{DictionaryPage, SanseidoPage, SearchResult};
use kotoba_store::{JsonFileStore, VocabularyRecord, VocabularyStore};
use tracing_subscriber::EnvFilter;

/// Look up Japanese vocabulary on Sanseido, extract structured entries, and
/// keep them in a local store for flashcard export.
#[derive(Parser)]
#[command(name = "kotoba", version)]
struct Cli {
    /// Dictionary to search in (JJ, JE, EJ)
    #[arg(short, long, global = true, default_value = "JJ")]
    dictionary: DictionaryType,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a word and print the extracted entry
    Search { word: String },

    /// Search a word and save it to the vocabulary store
    Add {
        word: String,

        /// Free-form notes to save with the word
        #[arg(short, long, default_value = "")]
        notes: String,

        /// The sentence or passage the word was read in
        #[arg(short, long, default_value = "")]
        context: String,
    },

    /// List the stored vocabulary
    List,

    /// Delete a stored word
    Delete { word: String },

    /// Export the store as Anki-importable TSV, or push to AnkiConnect
    Export {
        /// Write TSV here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Push notes to a running AnkiConnect instead of writing TSV
        #[arg(long)]
        anki: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::new();

    match cli.command {
        Command::Search { word } => search(&config, &word, cli.dictionary).await,
        Command::Add {
            word,
            notes,
            context,
        } => add(&config, &word, cli.dictionary, notes, context).await,
        Command::List => list(&config),
        Command::Delete { word } => delete(&config, &word, cli.dictionary),
        Command::Export { output, anki } => export(&config, output, anki).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

async fn fetch_entry(
    config: &Config,
    word: &str,
    dictionary: DictionaryType,
) -> Result<(VocabularyEntry, SearchResult)> {
    let page = SanseidoPage::new(config.network.timeout(), &config.network.user_agent)?;
    let result = page.search(word, dictionary).await?;
    let entry = VocabularyEntry::from_source(result.raw_source.as_deref(), &result.definition);

    Ok((entry, result))
}

async fn search(config: &Config, word: &str, dictionary: DictionaryType) -> Result<()> {
    let (entry, result) = fetch_entry(config, word, dictionary).await?;

    print_entry(&entry);

    if !result.related_words.is_empty() {
        println!("related:");
        for related in &result.related_words {
            println!("  {}", related.word);
        }
    }

    Ok(())
}

async fn add(
    config: &Config,
    word: &str,
    dictionary: DictionaryType,
    notes: String,
    context: String,
) -> Result<()> {
    let (entry, _) = fetch_entry(config, word, dictionary).await?;
    if entry.word().is_empty() {
        bail!("no entry found for '{word}' in {dictionary}");
    }

    let mut store = JsonFileStore::open(&config.store.path)?;
    if store.contains_entry(&entry, dictionary) {
        bail!("'{}' is already saved for {dictionary}", entry.word());
    }

    print_entry(&entry);
    let record = VocabularyRecord::new(&entry, dictionary, notes, context);
    store.insert(record)?;
    tracing::info!("Saved '{}' ({})", entry.word(), dictionary);

    Ok(())
}

fn list(config: &Config) -> Result<()> {
    let store = JsonFileStore::open(&config.store.path)?;

    for record in store.all() {
        println!(
            "{}\t{}\t{}\t{}",
            record.word, record.reading, record.dictionary_type, record.definition
        );
    }

    Ok(())
}

fn delete(config: &Config, word: &str, dictionary: DictionaryType) -> Result<()> {
    let mut store = JsonFileStore::open(&config.store.path)?;
    store.delete(word, dictionary)?;
    tracing::info!("Deleted '{}' ({})", word, dictionary);

    Ok(())
}

async fn export(config: &Config, output: Option<PathBuf>, anki: bool) -> Result<()> {
    let store = JsonFileStore::open(&config.store.path)?;
    let records = store.all();

    if anki {
        let client = AnkiConnectClient::new(config.anki.url.clone());
        let version = client
            .check_connection()
            .await
            .context("AnkiConnect is not reachable")?;
        tracing::info!("Connected to AnkiConnect v{}", version);

        let template = CardTemplate::new(
            config.anki.deck.clone(),
            config.anki.model.clone(),
            "{furigana}".to_string(),
            "{definition}\n{pitch}".to_string(),
        );

        for record in &records {
            let entry = record.to_entry();
            let note_id = client.add_entry(&template, &entry).await?;
            tracing::info!("Added note {} for '{}'", note_id, record.word);
        }

        return Ok(());
    }

    let tsv = records_to_tsv(&records);
    match output {
        Some(path) => std::fs::write(&path, tsv)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{tsv}"),
    }

    Ok(())
}

fn print_entry(entry: &VocabularyEntry) {
    println!("word:       {}", entry.word());
    println!("reading:    {}", entry.reading());
    println!("furigana:   {}", entry.furigana());
    if !entry.pitch().is_empty() {
        println!("pitch:      {}", entry.pitch());
    }
    println!("definition: {}", entry.definition());
}

use anyhow::{bail, Context, Result};
use clap::Parser;

use lectio::cli::{CliArgs, Command, DocumentArgs, DragArgs};
use lectio::config::AppConfig;
use lectio::model::{Document, InteractionMode, ReaderModel};
use lectio::store::{open_store, HighlightStore};
use lectio::util::text::tokenize;
use lectio::view::{model_states, render_marked};
use lectio::Runtime;

type StoreRuntime = Runtime<Box<dyn HighlightStore>>;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    lectio::tracing::init();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if let Some(user) = args.user {
        config.user_id = user;
    }

    match args.command {
        Command::Tokenize { file } => {
            let text = read_text(&file)?;
            for seg in tokenize(&text) {
                println!(
                    "{:>6} {:>6}  {:<6} {}{:?}",
                    seg.start_offset,
                    seg.end_offset,
                    seg.class.label(),
                    if seg.is_word { "*" } else { " " },
                    seg.content
                );
            }
        }

        Command::Show(doc) => {
            let runtime = open_runtime(&config, &doc)?;
            print_marked(&runtime);
        }

        Command::List { doc, json } => {
            let runtime = open_runtime(&config, &doc)?;
            let highlights = &runtime.model().highlights;
            if json {
                println!("{}", serde_json::to_string_pretty(highlights)?);
            } else {
                for h in highlights {
                    println!(
                        "{}  {:>6} {:>6}  {}",
                        h.id, h.start_offset, h.end_offset, h.highlighted_text
                    );
                }
            }
        }

        Command::Add(drag) => run_drag(&config, InteractionMode::Highlight, &drag)?,
        Command::Erase(drag) => run_drag(&config, InteractionMode::Erase, &drag)?,

        Command::LogPath => match lectio::config_paths::log_file() {
            Some(path) => println!("{}", path.display()),
            None => bail!("No config directory available"),
        },
    }

    Ok(())
}

fn read_text(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load the document, open the configured store and fetch its highlights
fn open_runtime(config: &AppConfig, doc: &DocumentArgs) -> Result<StoreRuntime> {
    let text = read_text(&doc.file)?;
    let store = open_store(&config.store).context("Failed to open highlight store")?;
    let model = ReaderModel::from_config(config, Document::new(doc.document_id(), text));

    let mut runtime = Runtime::new(model, store);
    runtime.start();
    Ok(runtime)
}

fn run_drag(config: &AppConfig, mode: InteractionMode, drag: &DragArgs) -> Result<()> {
    let mut runtime = open_runtime(config, &drag.doc)?;

    let document = &runtime.model().document;
    for offset in [drag.from, drag.to] {
        if document.word_at(offset).is_none() {
            bail!(
                "No word at offset {} in {} ({} characters)",
                offset,
                drag.doc.file.display(),
                document.char_len()
            );
        }
    }

    let before = runtime.model().highlights.len();
    runtime.drag(mode, drag.from, drag.to);

    if let Some(status) = runtime.model().status.as_ref().filter(|s| s.is_error()) {
        bail!("{}", status.text);
    }

    let after = runtime.model().highlights.len();
    tracing::info!(mode = mode.label(), before, after, "drag finished");
    print_marked(&runtime);
    Ok(())
}

fn print_marked(runtime: &StoreRuntime) {
    let model = runtime.model();
    println!(
        "{}",
        render_marked(model.document.segments(), &model_states(model))
    );
}

//! Command-line argument parsing
//!
//! Supports:
//! - Inspecting how a text tokenizes
//! - Showing and listing highlights for a document
//! - Simulating highlight and erase drags against the configured store

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::model::{DocumentId, InteractionMode};

/// Highlight scripture text from the terminal
#[derive(Parser, Debug)]
#[command(name = "lectio", version, about = "Highlight scripture text from the terminal")]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/lectio/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Act as this user instead of the configured one
    #[arg(long, global = true, value_name = "ID")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the segments a text splits into
    Tokenize {
        /// Text file to tokenize
        file: PathBuf,
    },
    /// Print the text with highlighted runs in [brackets]
    Show(DocumentArgs),
    /// List highlight rows
    List {
        #[command(flatten)]
        doc: DocumentArgs,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Highlight every word from one offset to another
    Add(DragArgs),
    /// Erase highlights from one offset to another
    Erase(DragArgs),
    /// Print the path of the current log file
    LogPath,
}

/// Which document to work on
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Text file holding the document
    pub file: PathBuf,

    /// Document id (defaults to the file stem)
    #[arg(long, value_name = "ID")]
    pub document: Option<String>,
}

impl DocumentArgs {
    pub fn document_id(&self) -> DocumentId {
        match &self.document {
            Some(id) => DocumentId::new(id.clone()),
            None => document_id_for(&self.file),
        }
    }
}

/// A simulated drag between two character offsets
#[derive(Args, Debug, Clone)]
pub struct DragArgs {
    #[command(flatten)]
    pub doc: DocumentArgs,

    /// Character offset inside the word where the drag starts
    #[arg(long, value_name = "N")]
    pub from: usize,

    /// Character offset inside the word where the drag ends
    #[arg(long, value_name = "N")]
    pub to: usize,
}

impl Command {
    /// The interaction mode a drag command runs in
    pub fn drag_mode(&self) -> Option<InteractionMode> {
        match self {
            Command::Add(_) => Some(InteractionMode::Highlight),
            Command::Erase(_) => Some(InteractionMode::Erase),
            _ => None,
        }
    }
}

/// File stem, or the whole file name when there is no stem
pub fn document_id_for(path: &Path) -> DocumentId {
    let id = path
        .file_stem()
        .or_else(|| path.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());
    DocumentId::new(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_defaults_to_file_stem() {
        let args = DocumentArgs {
            file: PathBuf::from("texts/psalm-23.txt"),
            document: None,
        };
        assert_eq!(args.document_id(), DocumentId::new("psalm-23"));
    }

    #[test]
    fn test_document_id_override() {
        let args = DocumentArgs {
            file: PathBuf::from("psalm-23.txt"),
            document: Some("ps-23".to_string()),
        };
        assert_eq!(args.document_id(), DocumentId::new("ps-23"));
    }

    #[test]
    fn test_parse_add() {
        let args = CliArgs::try_parse_from([
            "lectio", "--user", "ruth", "add", "psalm.txt", "--from", "4", "--to", "10",
        ])
        .unwrap();
        assert_eq!(args.user.as_deref(), Some("ruth"));
        assert_eq!(args.command.drag_mode(), Some(InteractionMode::Highlight));
        match args.command {
            Command::Add(drag) => {
                assert_eq!(drag.from, 4);
                assert_eq!(drag.to, 10);
                assert_eq!(drag.doc.document_id(), DocumentId::new("psalm"));
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_json() {
        let args = CliArgs::try_parse_from(["lectio", "list", "john-1.txt", "--json"]).unwrap();
        assert!(matches!(args.command, Command::List { json: true, .. }));
        assert!(args.command.drag_mode().is_none());
    }
}

//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the zohobooks binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Zoho Books command-line interface.
#[derive(Parser, Debug)]
#[command(name = "zohobooks", about = "Zoho Books API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID.
        id: String,
    },

    /// List entities with optional search and pagination.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Page number (1-indexed).
        #[arg(long, conflicts_with = "all")]
        page: Option<u32>,

        /// Number of items per page.
        #[arg(long, conflicts_with = "all")]
        per_page: Option<u32>,

        /// Last page to fetch; lists pages `--page` through `--to`.
        #[arg(long, conflicts_with = "all")]
        to: Option<u32>,

        /// Fetch every page.
        #[arg(long)]
        all: bool,

        /// Free-text search.
        #[arg(long)]
        search: Option<String>,
    },

    /// Delete an entity by ID.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The entity ID.
        id: String,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A customer or vendor.
    #[value(alias = "contacts")]
    Contact,
    /// A sales invoice.
    #[value(alias = "invoices")]
    Invoice,
    /// A vendor bill.
    #[value(alias = "bills")]
    Bill,
    /// A product or service.
    #[value(alias = "items")]
    Item,
}

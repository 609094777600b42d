use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Look up a place the way a recommendation card does.
    Place(PlaceArgs),
    /// Packing checklist.
    Checklist {
        #[command(subcommand)]
        action: ChecklistCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct PlaceArgs {
    /// Free-text query (place name plus context).
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Static card title used when the lookup yields nothing.
    #[arg(long)]
    pub title: Option<String>,

    /// Static card image used when the lookup has no photo.
    #[arg(long)]
    pub image: Option<String>,
}

impl PlaceArgs {
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum ChecklistCommands {
    /// Show items grouped by category, with progress.
    Show,
    /// Toggle an item's checked state.
    Toggle {
        /// Item id.
        id: String,
    },
    /// Restore the default item list.
    Reset,
}

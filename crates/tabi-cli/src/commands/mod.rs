use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub mod checklist;
pub mod place;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Place(args) => place::handle(&args, ctx, flags).await,
        Commands::Checklist { action } => checklist::handle(&action, ctx, flags),
    }
}

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands::{self, Outcome};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Outcome> {
    match command {
        Commands::Validate => commands::validate::handle(ctx, flags),
        Commands::Render => commands::render::handle(ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::NextId(args) => commands::next_id::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}

mod preset;
mod render;

use crate::Cli;
use crate::CommandResult;
use render::RenderCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "anilist-query")]
pub(crate) enum CommandEnum {
    /// Render one of the preset AniList queries.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Render(cmd) => cmd.run(cli).await
        }
    }
}

#[cfg(test)]
mod tests;

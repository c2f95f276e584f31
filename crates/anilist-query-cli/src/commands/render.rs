use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use super::preset::Preset;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        help="Parse the rendered query with a GraphQL parser and fail if it \
             is not a valid executable document.",
        long,
    )]
    check: bool,

    #[arg(
        help="Look the root entity up by its AniList id.",
        long,
    )]
    id: Option<i32>,

    #[arg(
        help="Print the JSON request body instead of the bare query.",
        long,
    )]
    json: bool,

    #[arg(
        help="Operation name to give the rendered query.",
        long,
    )]
    name: Option<String>,

    #[arg(
        help="The preset query to render.",
        name="PRESET",
        value_enum,
    )]
    preset: Preset,

    #[arg(
        help="Look the root entity up by a search string.",
        long,
    )]
    search: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let document = match self.preset.build(
            self.id,
            self.search.as_deref(),
            self.name,
        ) {
            Ok(document) => document,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to build the `{:?}` query: {e}",
                output_utils::RED_X,
                self.preset,
            )),
        };
        log::debug!("Rendered {} query: {document}", document.query_type());

        if self.check {
            if let Err(e) = graphql_parser::parse_query::<String>(document.query()) {
                return CommandResult::stderr(format_args!(
                    "{} Rendered query is not valid GraphQL: {e}",
                    output_utils::RED_X,
                ));
            }
            log::info!("{} Rendered query parsed successfully.", output_utils::GREEN_CHECK);
        }

        if self.json {
            match serde_json::to_string_pretty(&document) {
                Ok(body) => CommandResult::stdout(format_args!("{body}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize the request body: {e}",
                    output_utils::RED_X,
                )),
            }
        } else {
            CommandResult::stdout(format_args!("{document}"))
        }
    }
}

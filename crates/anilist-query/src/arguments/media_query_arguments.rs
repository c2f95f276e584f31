use crate::argument::ArgumentClass;
use crate::argument::ArgumentValue;
use crate::argument::ArgumentValueKind;
use crate::argument::GraphQueryArgument;
use crate::enums::MediaFormat;
use crate::enums::MediaSeason;
use crate::enums::MediaSort;
use crate::enums::MediaStatus;
use crate::enums::MediaType;

/// All available media query arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryArguments;
impl MediaQueryArguments {
    pub fn new() -> Self {
        Self
    }

    /// Filter by the media's format.
    pub fn format(&self, format: MediaFormat) -> GraphQueryArgument {
        argument("format", ArgumentValueKind::enum_of::<MediaFormat>(), format)
    }

    /// Filter by the media id.
    pub fn id(&self, id: i32) -> GraphQueryArgument {
        argument("id", ArgumentValueKind::Int, id)
    }

    /// Filter by the media's MyAnimeList id.
    pub fn id_mal(&self, id_mal: i32) -> GraphQueryArgument {
        argument("idMal", ArgumentValueKind::Int, id_mal)
    }

    /// Filter by if the media's intended for 18+ adult audiences.
    pub fn is_adult(&self, is_adult: bool) -> GraphQueryArgument {
        argument("isAdult", ArgumentValueKind::Boolean, is_adult)
    }

    /// Filter by the media's type. Sent as the `type` argument.
    pub fn media_type(&self, media_type: MediaType) -> GraphQueryArgument {
        argument("type", ArgumentValueKind::enum_of::<MediaType>(), media_type)
    }

    /// Filter by search query.
    pub fn search(&self, search: &str) -> GraphQueryArgument {
        argument("search", ArgumentValueKind::String, search)
    }

    /// Filter by the season the media was released in.
    pub fn season(&self, season: MediaSeason) -> GraphQueryArgument {
        argument("season", ArgumentValueKind::enum_of::<MediaSeason>(), season)
    }

    /// The year of the season (Winter 2017 would also include December 2016
    /// releases). Requires `season` argument.
    pub fn season_year(&self, season_year: i32) -> GraphQueryArgument {
        argument("seasonYear", ArgumentValueKind::Int, season_year)
    }

    /// The order the results will be returned in.
    pub fn sort(&self, sort: Vec<MediaSort>) -> GraphQueryArgument {
        argument(
            "sort",
            ArgumentValueKind::list_of(ArgumentValueKind::enum_of::<MediaSort>()),
            sort,
        )
    }

    /// Filter by the media's current release status.
    pub fn status(&self, status: MediaStatus) -> GraphQueryArgument {
        argument("status", ArgumentValueKind::enum_of::<MediaStatus>(), status)
    }
}

fn argument(
    name: &str,
    expected: ArgumentValueKind,
    value: impl Into<ArgumentValue>,
) -> GraphQueryArgument {
    GraphQueryArgument::new(name, ArgumentClass::Media, expected, value)
}

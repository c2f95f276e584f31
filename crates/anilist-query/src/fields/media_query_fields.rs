use crate::QueryType;
use crate::Result;
use crate::argument::ArgumentClass;
use crate::argument::GraphQueryArgument;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;
use crate::fields::FieldSlot;
use crate::fields::QueryFieldsTrait;
use inherent::inherent;

const ALLOWED_QUERY_TYPES: [QueryType; 5] = QueryType::ALL;

/// All available media query fields.
///
/// Media fields may be selected in every query type: directly under the root
/// of a `Media` query, or nested under edges and connections elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQueryFields {
    average_score: FieldSlot,
    chapters: FieldSlot,
    characters: FieldSlot,
    country_of_origin: FieldSlot,
    description: FieldSlot,
    duration: FieldSlot,
    episodes: FieldSlot,
    favourites: FieldSlot,
    format: FieldSlot,
    genres: FieldSlot,
    hashtag: FieldSlot,
    id: FieldSlot,
    id_mal: FieldSlot,
    is_adult: FieldSlot,
    is_licensed: FieldSlot,
    mean_score: FieldSlot,
    media_type: FieldSlot,
    popularity: FieldSlot,
    query_type: QueryType,
    season: FieldSlot,
    season_year: FieldSlot,
    site_url: FieldSlot,
    source: FieldSlot,
    status: FieldSlot,
    studios: FieldSlot,
    synonyms: FieldSlot,
    trending: FieldSlot,
    updated_at: FieldSlot,
    volumes: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for MediaQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::Media
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::Media,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            average_score: field("averageScore"),
            chapters: field("chapters"),
            characters: field("characters")
                .accepting(FieldClass::CharacterConnection)
                .with_arguments(ArgumentClass::Character),
            country_of_origin: field("countryOfOrigin"),
            description: field("description"),
            duration: field("duration"),
            episodes: field("episodes"),
            favourites: field("favourites"),
            format: field("format"),
            genres: field("genres"),
            hashtag: field("hashtag"),
            id: field("id"),
            id_mal: field("idMal"),
            is_adult: field("isAdult"),
            is_licensed: field("isLicensed"),
            mean_score: field("meanScore"),
            media_type: field("type"),
            popularity: field("popularity"),
            query_type,
            season: field("season"),
            season_year: field("seasonYear"),
            site_url: field("siteUrl"),
            source: field("source"),
            status: field("status"),
            studios: field("studios")
                .accepting(FieldClass::StudioConnection)
                .with_arguments(ArgumentClass::Studio),
            synonyms: field("synonyms"),
            trending: field("trending"),
            updated_at: field("updatedAt"),
            volumes: field("volumes"),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl MediaQueryFields {
    /// A weighted average score of all the user's scores of the media.
    pub fn average_score(&self) -> Result<GraphQueryField> {
        self.average_score.leaf()
    }

    /// The amount of chapters the manga has when complete.
    pub fn chapters(&self) -> Result<GraphQueryField> {
        self.chapters.leaf()
    }

    /// The characters in the media.
    ///
    /// Requires at least one character connection query field (see
    /// [`CharacterConnectionQueryFields`](crate::fields::CharacterConnectionQueryFields))
    /// and accepts character query arguments (see
    /// [`CharacterQueryArguments`](crate::arguments::CharacterQueryArguments)).
    pub fn characters(
        &self,
        fields: Vec<GraphQueryField>,
        arguments: Vec<GraphQueryArgument>,
    ) -> Result<GraphQueryField> {
        self.characters.bind(fields, arguments)
    }

    /// Where the media was created (ISO 3166-1 alpha-2).
    pub fn country_of_origin(&self) -> Result<GraphQueryField> {
        self.country_of_origin.leaf()
    }

    /// Short description of the media's story and characters.
    pub fn description(&self) -> Result<GraphQueryField> {
        self.description.leaf()
    }

    /// The general length of each anime episode in minutes.
    pub fn duration(&self) -> Result<GraphQueryField> {
        self.duration.leaf()
    }

    /// The amount of episodes the anime has when complete.
    pub fn episodes(&self) -> Result<GraphQueryField> {
        self.episodes.leaf()
    }

    /// The amount of users who have favourited the media.
    pub fn favourites(&self) -> Result<GraphQueryField> {
        self.favourites.leaf()
    }

    /// The format the media was released in.
    pub fn format(&self) -> Result<GraphQueryField> {
        self.format.leaf()
    }

    /// The genres of the media.
    pub fn genres(&self) -> Result<GraphQueryField> {
        self.genres.leaf()
    }

    /// Official Twitter hashtags for the media.
    pub fn hashtag(&self) -> Result<GraphQueryField> {
        self.hashtag.leaf()
    }

    /// The id of the media.
    pub fn id(&self) -> Result<GraphQueryField> {
        self.id.leaf()
    }

    /// The MyAnimeList id of the media.
    pub fn id_mal(&self) -> Result<GraphQueryField> {
        self.id_mal.leaf()
    }

    /// If the media is intended only for 18+ adult audiences.
    pub fn is_adult(&self) -> Result<GraphQueryField> {
        self.is_adult.leaf()
    }

    /// If the media is officially licensed or a self-published doujin release.
    pub fn is_licensed(&self) -> Result<GraphQueryField> {
        self.is_licensed.leaf()
    }

    /// Mean score of all the user's scores of the media.
    pub fn mean_score(&self) -> Result<GraphQueryField> {
        self.mean_score.leaf()
    }

    /// The type of the media; anime or manga. Selected as `type`.
    pub fn media_type(&self) -> Result<GraphQueryField> {
        self.media_type.leaf()
    }

    /// The number of users with the media on their list.
    pub fn popularity(&self) -> Result<GraphQueryField> {
        self.popularity.leaf()
    }

    /// The season the media was initially released in.
    pub fn season(&self) -> Result<GraphQueryField> {
        self.season.leaf()
    }

    /// The season year the media was initially released in.
    pub fn season_year(&self) -> Result<GraphQueryField> {
        self.season_year.leaf()
    }

    /// The url for the media page on the AniList website.
    pub fn site_url(&self) -> Result<GraphQueryField> {
        self.site_url.leaf()
    }

    /// Source type the media was adapted from.
    pub fn source(&self) -> Result<GraphQueryField> {
        self.source.leaf()
    }

    /// The current releasing status of the media.
    pub fn status(&self) -> Result<GraphQueryField> {
        self.status.leaf()
    }

    /// The companies who produced the media.
    ///
    /// Requires at least one studio connection query field (see
    /// [`StudioConnectionQueryFields`](crate::fields::StudioConnectionQueryFields))
    /// and accepts studio query arguments (see
    /// [`StudioQueryArguments`](crate::arguments::StudioQueryArguments)).
    pub fn studios(
        &self,
        fields: Vec<GraphQueryField>,
        arguments: Vec<GraphQueryArgument>,
    ) -> Result<GraphQueryField> {
        self.studios.bind(fields, arguments)
    }

    /// Alternative titles of the media.
    pub fn synonyms(&self) -> Result<GraphQueryField> {
        self.synonyms.leaf()
    }

    /// The amount of related activity in the past hour.
    pub fn trending(&self) -> Result<GraphQueryField> {
        self.trending.leaf()
    }

    /// When the media's data was last updated.
    pub fn updated_at(&self) -> Result<GraphQueryField> {
        self.updated_at.leaf()
    }

    /// The amount of volumes the manga has when complete.
    pub fn volumes(&self) -> Result<GraphQueryField> {
        self.volumes.leaf()
    }
}

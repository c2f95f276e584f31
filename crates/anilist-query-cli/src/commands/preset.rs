use anilist_query::QueryBuildError;
use anilist_query::QueryBuilder;
use anilist_query::QueryDocument;
use anilist_query::QueryType;
use anilist_query::argument::GraphQueryArgument;
use anilist_query::arguments::CharacterQueryArguments;
use anilist_query::arguments::MediaQueryArguments;
use anilist_query::arguments::StaffQueryArguments;
use anilist_query::arguments::StudioQueryArguments;
use anilist_query::arguments::UserQueryArguments;
use anilist_query::enums::CharacterSort;
use anilist_query::enums::StaffLanguage;
use anilist_query::fields::CharacterConnectionQueryFields;
use anilist_query::fields::CharacterEdgeQueryFields;
use anilist_query::fields::CharacterQueryFields;
use anilist_query::fields::MediaQueryFields;
use anilist_query::fields::PageInfoQueryFields;
use anilist_query::fields::StaffQueryFields;
use anilist_query::fields::StudioConnectionQueryFields;
use anilist_query::fields::StudioEdgeQueryFields;
use anilist_query::fields::StudioQueryFields;
use anilist_query::fields::UserQueryFields;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// A canned query for one of the root query types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum Preset {
    Character,
    Media,
    Staff,
    Studio,
    User,
}
impl Preset {
    pub fn query_type(&self) -> QueryType {
        match self {
            Self::Character => QueryType::Character,
            Self::Media => QueryType::Media,
            Self::Staff => QueryType::Staff,
            Self::Studio => QueryType::Studio,
            Self::User => QueryType::User,
        }
    }

    /// Build this preset's query, looking the root entity up by `id` and/or
    /// `search` when given.
    pub fn build(
        &self,
        id: Option<i32>,
        search: Option<&str>,
        name: Option<String>,
    ) -> Result<QueryDocument> {
        let query_type = self.query_type();
        let (fields, arguments) = match self {
            Self::Character => character_selection(id, search)?,
            Self::Media => media_selection(id, search)?,
            Self::Staff => staff_selection(id, search)?,
            Self::Studio => studio_selection(id, search)?,
            Self::User => user_selection(id, search)?,
        };
        log::debug!(
            "Building the `{:?}` preset with {} root arguments.",
            self,
            arguments.len(),
        );

        QueryBuilder::new(query_type)
            .set_name(name)?
            .set_arguments(arguments)?
            .set_fields(fields)?
            .build()
    }
}

type Selection = (Vec<anilist_query::field::GraphQueryField>, Vec<GraphQueryArgument>);

fn character_selection(id: Option<i32>, search: Option<&str>) -> Result<Selection> {
    let args = CharacterQueryArguments::new();
    let character = CharacterQueryFields::new(QueryType::Character);
    let fields = vec![
        character.id()?,
        character.age()?,
        character.blood_type()?,
        character.favourites()?,
        character.site_url()?,
    ];
    let arguments = id.map(|id| args.id(id)).into_iter()
        .chain(search.map(|search| args.search(search)))
        .collect();
    Ok((fields, arguments))
}

fn media_selection(id: Option<i32>, search: Option<&str>) -> Result<Selection> {
    let query_type = QueryType::Media;
    let args = MediaQueryArguments::new();
    let media = MediaQueryFields::new(query_type);
    let character_connection = CharacterConnectionQueryFields::new(query_type);
    let character_edge = CharacterEdgeQueryFields::new(query_type);
    let character = CharacterQueryFields::new(query_type);
    let staff = StaffQueryFields::new(query_type);
    let studio_connection = StudioConnectionQueryFields::new(query_type);
    let studio_edge = StudioEdgeQueryFields::new(query_type);
    let studio = StudioQueryFields::new(query_type);

    let characters = media.characters(
        vec![character_connection.edges(vec![
            character_edge.role()?,
            character_edge.node(vec![character.id()?])?,
            character_edge.voice_actors(
                vec![staff.id()?, staff.language_v2()?],
                vec![StaffQueryArguments::new().language(StaffLanguage::Japanese)],
            )?,
        ])?],
        vec![
            CharacterQueryArguments::new().sort(vec![CharacterSort::Role]),
            CharacterQueryArguments::new().per_page(5),
        ],
    )?;
    let studios = media.studios(
        vec![studio_connection.edges(vec![
            studio_edge.is_main()?,
            studio_edge.node(vec![studio.name()?])?,
        ])?],
        vec![StudioQueryArguments::new().is_main(true)],
    )?;

    let fields = vec![
        media.id()?,
        media.media_type()?,
        media.episodes()?,
        characters,
        studios,
    ];
    let arguments = id.map(|id| args.id(id)).into_iter()
        .chain(search.map(|search| args.search(search)))
        .collect();
    Ok((fields, arguments))
}

fn staff_selection(id: Option<i32>, search: Option<&str>) -> Result<Selection> {
    let query_type = QueryType::Staff;
    let args = StaffQueryArguments::new();
    let staff = StaffQueryFields::new(query_type);
    let character_connection = CharacterConnectionQueryFields::new(query_type);
    let character = CharacterQueryFields::new(query_type);
    let page_info = PageInfoQueryFields::new(query_type);

    let characters = staff.characters(
        vec![
            character_connection.page_info(vec![page_info.total()?])?,
            character_connection.nodes(vec![character.id()?])?,
        ],
        vec![CharacterQueryArguments::new().per_page(5)],
    )?;
    let fields = vec![
        staff.id()?,
        staff.language_v2()?,
        staff.home_town()?,
        characters,
    ];
    let arguments = id.map(|id| args.id(id)).into_iter()
        .chain(search.map(|search| args.search(search)))
        .collect();
    Ok((fields, arguments))
}

fn studio_selection(id: Option<i32>, search: Option<&str>) -> Result<Selection> {
    let args = StudioQueryArguments::new();
    let studio = StudioQueryFields::new(QueryType::Studio);
    let fields = vec![
        studio.id()?,
        studio.name()?,
        studio.is_animation_studio()?,
        studio.site_url()?,
    ];
    let arguments = id.map(|id| args.id(id)).into_iter()
        .chain(search.map(|search| args.search(search)))
        .collect();
    Ok((fields, arguments))
}

fn user_selection(id: Option<i32>, search: Option<&str>) -> Result<Selection> {
    let args = UserQueryArguments::new();
    let user = UserQueryFields::new(QueryType::User);
    let fields = vec![
        user.id()?,
        user.name()?,
        user.about()?,
        user.site_url()?,
    ];
    let arguments = id.map(|id| args.id(id)).into_iter()
        .chain(search.map(|search| args.search(search)))
        .collect();
    Ok((fields, arguments))
}

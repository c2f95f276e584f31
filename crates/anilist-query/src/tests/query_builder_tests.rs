use crate::QueryBuildError;
use crate::QueryBuildErrorKind;
use crate::QueryBuilder;
use crate::QueryType;
use crate::arguments::CharacterQueryArguments;
use crate::arguments::MediaQueryArguments;
use crate::arguments::StaffQueryArguments;
use crate::arguments::StudioQueryArguments;
use crate::arguments::UserQueryArguments;
use crate::enums::CharacterSort;
use crate::enums::MediaType;
use crate::enums::StaffLanguage;
use crate::fields::CharacterConnectionQueryFields;
use crate::fields::CharacterEdgeQueryFields;
use crate::fields::CharacterQueryFields;
use crate::fields::MediaQueryFields;
use crate::fields::PageInfoQueryFields;
use crate::fields::StaffQueryFields;
use crate::fields::StudioConnectionQueryFields;
use crate::fields::StudioEdgeQueryFields;
use crate::fields::StudioQueryFields;
use crate::fields::UserQueryFields;

type Result<T> = std::result::Result<T, QueryBuildError>;

fn media_document_with_characters_and_studios() -> Result<crate::QueryDocument> {
    let query_type = QueryType::Media;
    let media = MediaQueryFields::new(query_type);
    let character_connection = CharacterConnectionQueryFields::new(query_type);
    let character_edge = CharacterEdgeQueryFields::new(query_type);
    let character = CharacterQueryFields::new(query_type);
    let staff = StaffQueryFields::new(query_type);
    let studio_connection = StudioConnectionQueryFields::new(query_type);
    let studio_edge = StudioEdgeQueryFields::new(query_type);
    let studio = StudioQueryFields::new(query_type);
    let page_info = PageInfoQueryFields::new(query_type);

    let characters = media.characters(
        vec![
            character_connection.page_info(vec![page_info.has_next_page()?])?,
            character_connection.edges(vec![
                character_edge.role()?,
                character_edge.node(vec![character.id()?])?,
                character_edge.voice_actors(
                    vec![staff.id()?, staff.home_town()?],
                    vec![StaffQueryArguments::new().language(StaffLanguage::Japanese)],
                )?,
            ])?,
        ],
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

    QueryBuilder::new(query_type)
        .add_argument(MediaQueryArguments::new().id(1))?
        .add_argument(MediaQueryArguments::new().media_type(MediaType::Anime))?
        .add_field(media.id()?)?
        .add_field(media.episodes()?)?
        .add_field(characters)?
        .add_field(studios)?
        .build()
}

// ==========================================================================
// Successful builds
// ==========================================================================

#[test]
fn minimal_media_document() -> Result<()> {
    let media = MediaQueryFields::new(QueryType::Media);

    let document = QueryBuilder::new(QueryType::Media)
        .add_argument(MediaQueryArguments::new().id(1))?
        .add_field(media.id()?)?
        .add_field(media.episodes()?)?
        .build()?;

    assert_eq!(document.query(), "query { Media(id: 1) { id episodes } }");
    assert_eq!(document.operation_name(), None);
    assert_eq!(document.query_type(), QueryType::Media);
    Ok(())
}

#[test]
fn nested_media_document() -> Result<()> {
    let document = media_document_with_characters_and_studios()?;

    assert_eq!(
        document.query(),
        "query { Media(id: 1, type: ANIME) { id episodes \
        characters(sort: [ROLE], perPage: 5) { pageInfo { hasNextPage } \
        edges { role node { id } voiceActors(language: JAPANESE) { id homeTown } } } \
        studios(isMain: true) { edges { isMain node { name } } } } }",
    );
    Ok(())
}

#[test]
fn named_document() -> Result<()> {
    let user = UserQueryFields::new(QueryType::User);

    let document = QueryBuilder::new(QueryType::User)
        .set_name(Some("UserLookup".to_string()))?
        .add_argument(UserQueryArguments::new().name("someone"))?
        .add_field(user.id()?)?
        .add_field(user.site_url()?)?
        .build()?;

    assert_eq!(
        document.query(),
        "query UserLookup { User(name: \"someone\") { id siteUrl } }",
    );
    assert_eq!(document.operation_name(), Some("UserLookup"));
    Ok(())
}

#[test]
fn root_arguments_are_optional() -> Result<()> {
    let studio = StudioQueryFields::new(QueryType::Studio);

    let document = QueryBuilder::new(QueryType::Studio)
        .add_field(studio.name()?)?
        .build()?;

    assert_eq!(document.query(), "query { Studio { name } }");
    Ok(())
}

#[test]
fn set_fields_replaces_added_fields() -> Result<()> {
    let staff = StaffQueryFields::new(QueryType::Staff);

    let document = QueryBuilder::new(QueryType::Staff)
        .add_field(staff.age()?)?
        .set_fields(vec![staff.id()?, staff.years_active()?])?
        .add_argument(StaffQueryArguments::new().id(7))?
        .set_arguments(vec![StaffQueryArguments::new().search("Kana")])?
        .build()?;

    assert_eq!(
        document.query(),
        "query { Staff(search: \"Kana\") { id yearsActive } }",
    );
    Ok(())
}

#[test]
fn rendering_twice_is_identical() -> Result<()> {
    let first = media_document_with_characters_and_studios()?;
    let second = media_document_with_characters_and_studios()?;

    assert_eq!(first, second);
    assert_eq!(first.to_string(), first.query());
    Ok(())
}

#[test]
fn rendered_documents_parse_as_graphql() -> Result<()> {
    let document = media_document_with_characters_and_studios()?;

    let parsed = graphql_parser::parse_query::<String>(document.query());

    assert!(parsed.is_ok(), "failed to parse: {}", document.query());
    Ok(())
}

#[test]
fn escaped_strings_parse_as_graphql() -> Result<()> {
    let character = CharacterQueryFields::new(QueryType::Character);

    let document = QueryBuilder::new(QueryType::Character)
        .add_argument(CharacterQueryArguments::new().search("Ed \"Edward\"\\\n"))?
        .add_field(character.id()?)?
        .build()?;

    let parsed = graphql_parser::parse_query::<String>(document.query());
    assert!(parsed.is_ok(), "failed to parse: {}", document.query());
    Ok(())
}

// ==========================================================================
// Root validation
// ==========================================================================

#[test]
fn empty_root_selection() {
    let err = QueryBuilder::new(QueryType::Media).build().unwrap_err();

    assert_eq!(err, QueryBuildError::EmptyChildFields {
        expected_class: QueryType::Media.root_field_class(),
        field_name: "Media".to_string(),
    });
}

#[test]
fn root_fields_from_wrong_container() -> Result<()> {
    let media = MediaQueryFields::new(QueryType::Staff);
    let staff = StaffQueryFields::new(QueryType::Staff);

    let err = QueryBuilder::new(QueryType::Staff)
        .add_field(staff.id()?)?
        .add_field(media.id()?)?
        .add_field(media.episodes()?)?
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The following fields are not valid staff query fields id, episodes.",
    );
    Ok(())
}

#[test]
fn root_arguments_from_wrong_container() -> Result<()> {
    let media = MediaQueryFields::new(QueryType::Media);

    let err = QueryBuilder::new(QueryType::Media)
        .add_argument(StaffQueryArguments::new().id(1))?
        .add_field(media.id()?)?
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), QueryBuildErrorKind::ArgumentValidation);
    Ok(())
}

#[test]
fn root_argument_with_wrong_value_type() -> Result<()> {
    let media = MediaQueryFields::new(QueryType::Media);
    let season_year = crate::argument::GraphQueryArgument::new(
        "seasonYear",
        crate::argument::ArgumentClass::Media,
        crate::argument::ArgumentValueKind::Int,
        "2020",
    );

    let err = QueryBuilder::new(QueryType::Media)
        .add_argument(season_year)?
        .add_field(media.id()?)?
        .build()
        .unwrap_err();

    assert_eq!(err.kind(), QueryBuildErrorKind::ArgumentType);
    assert_eq!(
        err.to_string(),
        "Query argument (seasonYear) expects a value of type Int but was \
        given a value of type String.",
    );
    Ok(())
}

#[test]
fn root_arguments_out_of_graphql_range() -> Result<()> {
    let media = MediaQueryFields::new(QueryType::Media);
    let average_score = crate::argument::GraphQueryArgument::new(
        "averageScore",
        crate::argument::ArgumentClass::Media,
        crate::argument::ArgumentValueKind::Float,
        f64::NAN,
    );
    let id = crate::argument::GraphQueryArgument::new(
        "id",
        crate::argument::ArgumentClass::Media,
        crate::argument::ArgumentValueKind::Int,
        i64::MAX,
    );

    for argument in [average_score, id] {
        let err = QueryBuilder::new(QueryType::Media)
            .add_argument(argument)?
            .add_field(media.id()?)?
            .build()
            .unwrap_err();

        assert_eq!(err.kind(), QueryBuildErrorKind::ArgumentType);
    }
    Ok(())
}

#[test]
fn fields_from_another_query_type() -> Result<()> {
    // Same owner class, but defined for a Staff query.
    let media = MediaQueryFields::new(QueryType::Staff);

    let err = QueryBuilder::new(QueryType::Media)
        .add_field(media.id()?)?
        .build()
        .unwrap_err();

    assert_eq!(err, QueryBuildError::Configuration {
        field_name: "id".to_string(),
        query_type: QueryType::Media,
    });
    Ok(())
}

#[test]
fn nested_fields_from_another_query_type() -> Result<()> {
    let media = MediaQueryFields::new(QueryType::Media);
    let studio_connection = StudioConnectionQueryFields::new(QueryType::Media);
    let studio = StudioQueryFields::new(QueryType::Studio);

    let studios = media.studios(
        vec![studio_connection.nodes(vec![studio.name()?])?],
        vec![],
    )?;
    let err = QueryBuilder::new(QueryType::Media)
        .add_field(studios)?
        .build()
        .unwrap_err();

    assert_eq!(err, QueryBuildError::Configuration {
        field_name: "name".to_string(),
        query_type: QueryType::Media,
    });
    Ok(())
}

// ==========================================================================
// Operation names
// ==========================================================================

#[test]
fn invalid_operation_names() {
    for name in ["", "1Query", "Media Query", "query-name", "Ünïcode"] {
        let err = QueryBuilder::new(QueryType::Media)
            .set_name(Some(name.to_string()))
            .unwrap_err();

        assert_eq!(err, QueryBuildError::InvalidOperationName {
            operation_name: name.to_string(),
        });
        assert_eq!(err.kind(), QueryBuildErrorKind::Configuration);
    }
}

#[test]
fn valid_operation_names() {
    for name in ["MediaQuery", "_private", "q2", "__typename_like"] {
        let builder = QueryBuilder::new(QueryType::Media)
            .set_name(Some(name.to_string()));

        assert!(builder.is_ok(), "{name} was rejected");
    }
}

#[test]
fn clearing_the_operation_name() -> Result<()> {
    let media = MediaQueryFields::new(QueryType::Media);

    let document = QueryBuilder::new(QueryType::Media)
        .set_name(Some("Named".to_string()))?
        .set_name(None)?
        .add_field(media.id()?)?
        .build()?;

    assert_eq!(document.query(), "query { Media { id } }");
    assert_eq!(document.operation_name(), None);
    Ok(())
}

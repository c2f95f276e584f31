use crate::QueryBuildError;
use crate::QueryBuildErrorKind;
use crate::QueryType;
use crate::arguments::MediaQueryArguments;
use crate::arguments::StaffQueryArguments;
use crate::enums::StaffLanguage;
use crate::enums::StaffSort;
use crate::field::FieldClass;
use crate::fields::CharacterEdgeQueryFields;
use crate::fields::CharacterQueryFields;
use crate::fields::MediaQueryFields;
use crate::fields::StaffQueryFields;

#[test]
fn node_with_one_character_field() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::Media);
    let character = CharacterQueryFields::new(QueryType::Media);

    let node = character_edge.node(vec![character.id().unwrap()]).unwrap();

    assert_eq!(node.name(), "node");
    assert_eq!(node.owner(), FieldClass::CharacterEdge);
    assert_eq!(node.children().len(), 1);
    assert_eq!(node.children()[0].name(), "id");
    assert_eq!(node.to_string(), "node { id }");
}

#[test]
fn node_rejects_non_character_fields() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::Media);
    let character = CharacterQueryFields::new(QueryType::Media);
    let staff = StaffQueryFields::new(QueryType::Media);

    let err = character_edge
        .node(vec![
            staff.id().unwrap(),
            character.id().unwrap(),
            staff.age().unwrap(),
        ])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The following fields are not valid character query fields id, age.",
    );
}

#[test]
fn voice_actors_without_fields() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::Media);

    let err = character_edge.voice_actors(vec![], vec![]).unwrap_err();

    assert_eq!(err.kind(), QueryBuildErrorKind::FieldValidation);
    let message = err.to_string();
    assert!(message.contains("voiceActors"));
    assert!(message.contains("at least one staff query field"));
}

#[test]
fn voice_actors_with_argument_from_wrong_class() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::Media);
    let staff = StaffQueryFields::new(QueryType::Media);

    let err = character_edge
        .voice_actors(
            vec![staff.id().unwrap()],
            vec![MediaQueryArguments::new().search("Bebop")],
        )
        .unwrap_err();

    assert_eq!(err.kind(), QueryBuildErrorKind::ArgumentValidation);
    assert!(matches!(
        err,
        QueryBuildError::InvalidArguments { ref invalid_argument_names, .. }
            if invalid_argument_names == &vec!["search".to_string()],
    ));
}

#[test]
fn voice_actors_with_staff_arguments() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::Media);
    let staff = StaffQueryFields::new(QueryType::Media);
    let staff_args = StaffQueryArguments::new();

    let voice_actors = character_edge
        .voice_actors(
            vec![staff.id().unwrap(), staff.language_v2().unwrap()],
            vec![
                staff_args.language(StaffLanguage::Japanese),
                staff_args.sort(vec![StaffSort::Role, StaffSort::Relevance]),
            ],
        )
        .unwrap();

    assert_eq!(
        voice_actors.to_string(),
        "voiceActors(language: JAPANESE, sort: [ROLE, RELEVANCE]) { id languageV2 }",
    );
}

#[test]
fn media_accepts_media_fields() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::Staff);
    let media = MediaQueryFields::new(QueryType::Staff);

    let field = character_edge
        .media(vec![media.id().unwrap(), media.media_type().unwrap()])
        .unwrap();

    assert_eq!(field.to_string(), "media { id type }");
}

#[test]
fn leaf_accessors_return_scoped_fields() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::User);

    for field in [
        character_edge.id().unwrap(),
        character_edge.role().unwrap(),
        character_edge.favourite_order().unwrap(),
    ] {
        assert!(field.is_leaf());
        assert_eq!(field.owner(), FieldClass::CharacterEdge);
        assert_eq!(field.query_type(), QueryType::User);
    }
    assert_eq!(character_edge.query_type(), QueryType::User);
    assert_eq!(
        CharacterEdgeQueryFields::field_class(),
        FieldClass::CharacterEdge,
    );
}

#[test]
fn container_can_be_reused_for_several_selections() {
    let character_edge = CharacterEdgeQueryFields::new(QueryType::Media);
    let character = CharacterQueryFields::new(QueryType::Media);

    let first = character_edge.node(vec![character.id().unwrap()]).unwrap();
    let second = character_edge
        .node(vec![character.site_url().unwrap(), character.age().unwrap()])
        .unwrap();

    assert_eq!(first.to_string(), "node { id }");
    assert_eq!(second.to_string(), "node { siteUrl age }");
}

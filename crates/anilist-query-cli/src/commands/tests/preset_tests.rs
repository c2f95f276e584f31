use crate::commands::preset::Preset;
use anilist_query::QueryType;

const ALL_PRESETS: [Preset; 5] = [
    Preset::Character,
    Preset::Media,
    Preset::Staff,
    Preset::Studio,
    Preset::User,
];

#[test]
fn every_preset_builds_valid_graphql() {
    for preset in ALL_PRESETS {
        let document = preset.build(Some(1), Some("Bebop"), None).unwrap();

        assert_eq!(document.query_type(), preset.query_type());
        assert!(
            graphql_parser::parse_query::<String>(document.query()).is_ok(),
            "{preset:?} rendered invalid GraphQL: {}",
            document.query(),
        );
    }
}

#[test]
fn studio_preset_without_lookup_arguments() {
    let document = Preset::Studio.build(None, None, None).unwrap();

    assert_eq!(
        document.query(),
        "query { Studio { id name isAnimationStudio siteUrl } }",
    );
}

#[test]
fn user_preset_with_name() {
    let document = Preset::User
        .build(Some(42), None, Some("Profile".to_string()))
        .unwrap();

    assert_eq!(
        document.query(),
        "query Profile { User(id: 42) { id name about siteUrl } }",
    );
    assert_eq!(document.query_type(), QueryType::User);
}

#[test]
fn preset_rejects_invalid_operation_name() {
    let err = Preset::Media
        .build(None, None, Some("not valid".to_string()))
        .unwrap_err();

    assert_eq!(err.kind(), anilist_query::QueryBuildErrorKind::Configuration);
}

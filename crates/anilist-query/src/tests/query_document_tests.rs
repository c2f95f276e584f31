use crate::QueryBuilder;
use crate::QueryType;
use crate::arguments::MediaQueryArguments;
use crate::fields::MediaQueryFields;

#[test]
fn serializes_as_request_body() {
    let media = MediaQueryFields::new(QueryType::Media);
    let document = QueryBuilder::new(QueryType::Media)
        .add_argument(MediaQueryArguments::new().search("Cowboy Bebop"))
        .unwrap()
        .add_field(media.id().unwrap())
        .unwrap()
        .build()
        .unwrap();

    let body = serde_json::to_value(&document).unwrap();

    assert_eq!(body, serde_json::json!({
        "query": "query { Media(search: \"Cowboy Bebop\") { id } }"
    }));
}

#[test]
fn serializes_operation_name_when_named() {
    let media = MediaQueryFields::new(QueryType::Media);
    let document = QueryBuilder::new(QueryType::Media)
        .set_name(Some("Bebop".to_string()))
        .unwrap()
        .add_field(media.id().unwrap())
        .unwrap()
        .build()
        .unwrap();

    let body = serde_json::to_string(&document).unwrap();

    assert_eq!(
        body,
        r#"{"operationName":"Bebop","query":"query Bebop { Media { id } }"}"#,
    );
}

#[test]
fn into_query_returns_the_text() {
    let media = MediaQueryFields::new(QueryType::Media);
    let document = QueryBuilder::new(QueryType::Media)
        .add_field(media.popularity().unwrap())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(document.into_query(), "query { Media { popularity } }");
}

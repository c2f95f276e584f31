use crate::QueryType;
use crate::field::FieldRules;

#[test]
fn allows_only_listed_query_types() {
    let rules = FieldRules::new(false, [QueryType::Media, QueryType::Staff]);

    assert!(rules.allows(QueryType::Media));
    assert!(rules.allows(QueryType::Staff));
    assert!(!rules.allows(QueryType::Studio));
    assert!(!rules.allows(QueryType::User));
    assert!(!rules.requires_arguments());
}

#[test]
fn allowed_query_types_keep_insertion_order_and_dedupe() {
    let rules = FieldRules::new(true, [
        QueryType::User,
        QueryType::Media,
        QueryType::User,
    ]);

    let allowed: Vec<QueryType> =
        rules.allowed_query_types().iter().copied().collect();
    assert_eq!(allowed, vec![QueryType::User, QueryType::Media]);
    assert!(rules.requires_arguments());
}

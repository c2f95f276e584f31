use crate::QueryType;
use crate::Result;
use crate::field::FieldClass;
use crate::field::FieldRules;
use crate::field::GraphQueryField;
use crate::fields::FieldSlot;
use crate::fields::QueryFieldsTrait;
use inherent::inherent;

const ALLOWED_QUERY_TYPES: [QueryType; 5] = QueryType::ALL;

/// All available page info query fields.
#[derive(Clone, Debug, PartialEq)]
pub struct PageInfoQueryFields {
    current_page: FieldSlot,
    has_next_page: FieldSlot,
    last_page: FieldSlot,
    per_page: FieldSlot,
    query_type: QueryType,
    total: FieldSlot,
}

#[inherent]
impl QueryFieldsTrait for PageInfoQueryFields {
    pub fn field_class() -> FieldClass {
        FieldClass::PageInfo
    }

    pub fn new(query_type: QueryType) -> Self {
        let field = |name| FieldSlot::new(
            name,
            FieldClass::PageInfo,
            query_type,
            FieldRules::new(false, ALLOWED_QUERY_TYPES),
        );

        Self {
            current_page: field("currentPage"),
            has_next_page: field("hasNextPage"),
            last_page: field("lastPage"),
            per_page: field("perPage"),
            query_type,
            total: field("total"),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }
}

impl PageInfoQueryFields {
    /// The current page.
    pub fn current_page(&self) -> Result<GraphQueryField> {
        self.current_page.leaf()
    }

    /// If there is another page.
    pub fn has_next_page(&self) -> Result<GraphQueryField> {
        self.has_next_page.leaf()
    }

    /// The last page.
    pub fn last_page(&self) -> Result<GraphQueryField> {
        self.last_page.leaf()
    }

    /// The count on a page.
    pub fn per_page(&self) -> Result<GraphQueryField> {
        self.per_page.leaf()
    }

    /// The total number of items. Note: This value is not guaranteed to be
    /// accurate, do not rely on this for logic.
    pub fn total(&self) -> Result<GraphQueryField> {
        self.total.leaf()
    }
}

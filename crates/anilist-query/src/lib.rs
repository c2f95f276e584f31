//! A strongly-typed query builder for the [AniList](https://anilist.co)
//! GraphQL API.
//!
//! Queries are assembled from typed [`GraphQueryField`](field::GraphQueryField)
//! and [`GraphQueryArgument`](argument::GraphQueryArgument) values handed out
//! by per-schema-type containers (see [`fields`] and [`arguments`]). Every
//! field and argument knows which schema class it belongs to, so attaching it
//! under a parent that does not accept it is rejected before any query text
//! is produced.
//!
//! ```
//! use anilist_query::QueryBuilder;
//! use anilist_query::QueryType;
//! use anilist_query::arguments::MediaQueryArguments;
//! use anilist_query::fields::MediaQueryFields;
//!
//! let media = MediaQueryFields::new(QueryType::Media);
//! let document = QueryBuilder::new(QueryType::Media)
//!     .add_argument(MediaQueryArguments::new().id(1))?
//!     .add_field(media.id()?)?
//!     .add_field(media.episodes()?)?
//!     .build()?;
//!
//! assert_eq!(document.query(), "query { Media(id: 1) { id episodes } }");
//! # Ok::<(), anilist_query::QueryBuildError>(())
//! ```

pub mod argument;
pub mod arguments;
pub mod enums;
pub mod field;
pub mod fields;
mod query_build_error;
mod query_builder;
mod query_document;
mod query_type;

pub use query_build_error::QueryBuildError;
pub use query_build_error::QueryBuildErrorKind;
pub use query_builder::QueryBuilder;
pub use query_document::QueryDocument;
pub use query_type::QueryType;

pub(crate) type Result<T> = std::result::Result<T, QueryBuildError>;

#[cfg(test)]
mod tests;

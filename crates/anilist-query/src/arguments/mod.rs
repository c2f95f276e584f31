//! Query-arguments containers: one per [`ArgumentClass`], with one typed
//! constructor per schema argument.
//!
//! [`ArgumentClass`]: crate::argument::ArgumentClass

mod character_query_arguments;
mod media_query_arguments;
mod staff_query_arguments;
mod studio_query_arguments;
mod user_query_arguments;

pub use character_query_arguments::CharacterQueryArguments;
pub use media_query_arguments::MediaQueryArguments;
pub use staff_query_arguments::StaffQueryArguments;
pub use studio_query_arguments::StudioQueryArguments;
pub use user_query_arguments::UserQueryArguments;

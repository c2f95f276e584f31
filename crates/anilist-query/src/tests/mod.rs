mod query_builder_tests;
mod query_document_tests;

mod character_edge_query_fields_tests;

mod graph_query_argument_tests;

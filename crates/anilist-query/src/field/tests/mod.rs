mod field_rules_tests;

mod preset_tests;

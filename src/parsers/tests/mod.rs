mod menu_parser_tests;

mod filter_tests;
mod parser_tests;
mod settings_tests;

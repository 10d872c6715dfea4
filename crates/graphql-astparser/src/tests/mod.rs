mod directive_location_tests;
mod lexer_tests;
mod pool_tests;
mod type_tests;
mod utils;
mod value_tests;

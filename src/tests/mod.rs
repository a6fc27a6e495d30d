mod fetcher_tests;
mod utils;

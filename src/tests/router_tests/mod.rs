mod export_tests;
mod shell_tests;

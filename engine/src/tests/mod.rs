mod command_tests;
mod report_tests;

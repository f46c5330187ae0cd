mod check_run_tests;
mod config_dir_tests;

//! Integration tests for Site-Harvest

mod harvest_tests;

//! Test suite for the course catalog service

mod query_tests;

//! Unit tests for the geodesy core

mod bbox_tests;

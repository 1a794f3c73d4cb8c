//! Unit tests for coordinate text parsing

mod dms_tests;

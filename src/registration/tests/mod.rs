// src/registration/tests/mod.rs

mod validators_tests;

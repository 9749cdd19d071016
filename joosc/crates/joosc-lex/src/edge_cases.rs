//! Edge case tests for joosc-lex

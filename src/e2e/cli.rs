//! .

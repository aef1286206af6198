//! Tests for the token authentication service

//! Tests for the refresh token repository mock

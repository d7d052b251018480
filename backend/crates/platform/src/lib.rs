//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - HTTP Basic credential extraction

pub mod basic_auth;
pub mod password;

// src/ui/mod.rs
pub mod chat;
pub mod home;
pub mod products;

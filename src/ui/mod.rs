// src/ui/mod.rs
pub mod insights;
pub mod analysis;

// Lifestyle & Medical History Domain
// This crate contains the business logic for the lifestyle and medical history service

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

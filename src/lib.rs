//! QRCraft - Command-line QR code workshop
//!
//! This library provides the core pipeline behind the qrcraft binary:
//! payload construction for the four input modes (URL, free text, Wi-Fi
//! credentials, contact cards), symbol rendering through the qrcode crate,
//! logo compositing, and PNG / clipboard export.

// Module declarations
pub mod cli;
pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod payload;
pub mod render;
pub mod session;

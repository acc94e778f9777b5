//! Pages
//!
//! Fetch-and-render page flows built on the API client.

pub mod main_page;

pub use main_page::MainPage;

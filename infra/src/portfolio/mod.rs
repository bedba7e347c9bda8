//! Portfolio data provider client

mod client;

pub use client::DebankClient;

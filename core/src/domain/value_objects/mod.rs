//! Value objects: read-only data shapes passed through from external
//! collaborators

pub mod portfolio;

pub use portfolio::{
    Airdrop, AirdropStatus, ChainBalance, PortfolioItem, PortfolioStats, Protocol, Token,
    TotalBalance, WalletOverview,
};

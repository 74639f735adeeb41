pub mod balance;
pub mod rates;
pub mod stats;
pub mod ui;

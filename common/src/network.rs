pub mod interface;
pub mod miner;
pub mod target;

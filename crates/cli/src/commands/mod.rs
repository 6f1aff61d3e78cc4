pub mod governance;
pub mod network;
pub mod staking;
pub mod status;
pub mod wallet;

pub mod mint_job;
pub mod nft;
pub mod release;
pub mod sale;
pub mod status;
pub mod track;

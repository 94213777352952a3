//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod mint_job_repo;
pub mod nft_repo;
pub mod release_repo;
pub mod sale_repo;
pub mod track_repo;

pub use mint_job_repo::MintJobRepo;
pub use nft_repo::NftRepo;
pub use release_repo::ReleaseRepo;
pub use sale_repo::SaleRepo;
pub use track_repo::TrackRepo;

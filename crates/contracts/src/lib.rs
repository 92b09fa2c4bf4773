pub mod artifact;
pub mod nft;

pub use {
    artifact::Artifact,
    nft::{Deployment, Nft},
};

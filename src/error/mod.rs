pub mod studiehub;

pub use studiehub::StudieHubError;

pub mod directus;

pub use directus::DirectusBackend;

//! Concrete backends for the Linkdeck core.
//!
//! TOML-file repositories for profiles and links, filesystem object
//! storage for avatars, an in-process authenticator for local runs and
//! tests, and default data-dir paths.

pub mod dto;
pub mod fs_object_storage;
pub mod paths;
pub mod static_authenticator;
pub mod storage;
pub mod toml_link_repository;
pub mod toml_profile_repository;

pub use fs_object_storage::FsObjectStorage;
pub use static_authenticator::StaticAuthenticator;
pub use toml_link_repository::TomlLinkRepository;
pub use toml_profile_repository::TomlProfileRepository;

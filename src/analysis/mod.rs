pub mod classifier;
pub mod composer;
pub mod composition;
pub mod items;
pub mod meta;
pub mod position;
pub mod roles;
pub mod scorer;

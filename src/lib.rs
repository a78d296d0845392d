pub mod capture;
pub mod config;
pub mod filter;
pub mod layout;
pub mod model;
pub mod timeline;

#[cfg(test)]
mod test;

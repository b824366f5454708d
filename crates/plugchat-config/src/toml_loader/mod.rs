//! Locating, reading and seeding the TOML config file.

mod source;
mod template;

#[cfg(test)]
mod tests;

pub use source::ConfigSource;

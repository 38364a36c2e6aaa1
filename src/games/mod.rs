//! Concrete game worlds for exercising the search engine.

pub mod grid;

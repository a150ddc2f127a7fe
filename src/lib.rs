// src/lib.rs

//! Vacancy Crawler Library
//!
//! Walks the career.habr.com search listing, reads every vacancy's detail
//! page and keeps an accumulating JSON snapshot of everything seen so far.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod fixtures;

//! Reactive state: contexts and hooks wrapping the `shared` controllers

pub mod content;
pub mod entrance;
pub mod reveal;
pub mod sticky;

//! A secret friend draw: names are collected into a roster and one is picked uniformly at
//! random. The widget logic lives in `widget`; `surface` and `reporting` put it on a terminal.

pub mod error;
pub mod names_file;
pub mod random;
pub mod reporting;
pub mod roster;
pub mod session;
pub mod surface;
pub mod widget;

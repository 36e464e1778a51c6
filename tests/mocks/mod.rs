#![allow(dead_code)]

pub mod images;
pub mod picker;
pub mod stub_server;
pub mod summarizer;
pub mod videos;

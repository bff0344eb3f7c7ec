#![allow(dead_code)]

pub mod architecture;
pub mod odds;

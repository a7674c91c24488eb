#[macro_use]
extern crate approx;

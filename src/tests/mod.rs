#![cfg(test)]
mod set_algebra;

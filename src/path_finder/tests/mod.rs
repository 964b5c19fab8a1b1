mod basic;
mod properties;

mod basic;
mod concurrency;

mod concurrency;
mod dst;
mod properties;

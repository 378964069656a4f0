mod boundaries;
mod enumeration;
mod membership;
mod stepping;

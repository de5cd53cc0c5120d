// Reference resolution: alias tables, the ordered parsing strategies, and the span policy.
// Everything here is pure and synchronous; the only I/O lives behind `verses::fetcher`.

pub mod aliases;
pub mod parser;
pub mod policy;

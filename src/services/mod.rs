pub mod encoding;
pub mod fingerprint;
pub mod output;
pub mod pipeline;
pub mod qa;
pub mod ts;

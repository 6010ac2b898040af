pub mod rfp;

pub use rfp::{zero_timestamp, Rfp, RfpPayload, RfpRow};

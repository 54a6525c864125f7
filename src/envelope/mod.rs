//! Response envelopes and the candidate-key decoder.

mod decode;
mod types;

pub use decode::{decode, decode_page, decode_sequence, decode_single, CandidateKey, Candidates, Shape};
pub use types::{Envelope, PageContext, PagedEnvelope, Payload};

pub mod outcome;
pub mod request;

pub use outcome::{CandidateSource, ResolvedPath};
pub use request::ResolutionRequest;

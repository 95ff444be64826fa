//! Point-of-interest pipeline: candidate search, tour sequencing, travel
//! and visit timing, and day bucketing.

pub mod candidates;
pub mod days;
pub mod distance;
pub mod profiles;
pub mod sequencer;
pub mod visit;

pub use candidates::CandidateSearch;
pub use days::{chunk_into_days, stops_per_day};
pub use distance::{MAX_MATRIX_ELEMENTS, TravelLeg, estimate_travel_legs};
pub use profiles::{TripTypeProfile, profile_for};
pub use sequencer::sequence_by_nearest;
pub use visit::{estimate_visit_minutes, format_duration};

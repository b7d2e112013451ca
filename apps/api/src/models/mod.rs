pub mod job;
pub mod profile;
pub mod resume;

pub use job::JobRequirement;
pub use profile::Profile;
pub use resume::Resume;

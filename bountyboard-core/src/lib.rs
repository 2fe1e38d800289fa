pub mod organization;
pub mod roles;
pub mod store;

// Note: the decision service composing these types lives in the bountyboard
// crate; this crate stays free of runtime and I/O concerns.

pub mod authorizer;
pub mod claimer;
pub mod verifier;

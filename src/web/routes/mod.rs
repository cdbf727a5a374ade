pub mod activities;
pub mod signup;

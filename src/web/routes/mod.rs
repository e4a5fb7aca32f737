pub mod activities;
pub mod health;
pub mod signup;

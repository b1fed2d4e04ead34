/// Artist directory routes
pub mod artists;
/// Health check routes
pub mod health;
/// Home page route
pub mod home;
/// Show listing and booking routes
pub mod shows;
/// Venue directory routes
pub mod venues;

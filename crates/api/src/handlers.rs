/// Artist directory handlers
pub mod artists;
/// Show listing and booking handlers
pub mod shows;
/// Venue directory handlers
pub mod venues;

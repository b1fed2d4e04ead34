mod artists_test;
mod venues_test;

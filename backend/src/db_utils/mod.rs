pub mod listings_file;

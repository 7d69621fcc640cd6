pub mod csv_writer;
pub mod listing_parser;
pub mod pagination;
pub mod tag_links;

pub use csv_writer::CsvWriter;
pub use pagination::PaginationEnumerator;
pub use tag_links::TagLinkResolver;

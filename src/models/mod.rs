pub mod criteria;
pub mod loaders;
pub mod record;

pub use criteria::Criteria;
pub use loaders::{load_criteria_file, parse_criteria};
pub use record::{Record, ResultSet};

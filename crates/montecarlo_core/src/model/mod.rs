mod criteria;
mod results;
mod walk;

pub use criteria::{ComparisonTest, ControlCategory, Criteria, Pool};
pub use results::{CriteriaOutcome, PoolStatistics};
pub use walk::Walk;

mod raw;
pub use self::raw::{RawDate, RawNumber};

mod history;
pub use self::history::{HistoryResponse, Period};

mod quote;
pub use self::quote::Snapshot;

mod market;
pub use self::market::{MarketSnapshot, MarketStatus};

mod comparison;
pub use self::comparison::ComparisonResponse;

mod company;
pub use self::company::Company;

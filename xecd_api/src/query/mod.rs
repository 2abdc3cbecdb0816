mod common;
pub use self::common::{Query, QueryParams, QueryValue, Resource};

mod conversion;
pub use self::conversion::{Conversion, ConversionQuery, ConvertFromQuery, ConvertToQuery};

mod account;
pub use self::account::AccountInfoQuery;

mod currencies;
pub use self::currencies::CurrenciesQuery;

mod historic;
pub use self::historic::{HistoricRatePeriodQuery, HistoricRateQuery};

mod monthly_average;
pub use self::monthly_average::MonthlyAverageQuery;
